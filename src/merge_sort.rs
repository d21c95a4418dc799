//! Stable top-down merge sort.
//!
//! Elements the comparator treats as equivalent keep their relative order. Runs in O(n log n)
//! time and uses one auxiliary buffer the size of the sorted range.

use std::ops::Range;

use crate::comparator::Comparator;

/// Sort the complete sequence.
///
/// # Examples
/// ```
/// use conference_schedule::merge_sort::merge_sort;
/// let mut values = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
/// merge_sort(&mut values, &|a: &(i32, char), b: &(i32, char)| a.0 < b.0);
/// assert_eq!(values, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
/// ```
pub fn merge_sort<T, C>(items: &mut [T], comparator: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let len = items.len();
    merge_sort_range(items, 0..len, comparator)
}

/// Sort the half-open `range` of `items`, leaving the rest untouched. An empty range is a no-op.
///
/// # Panics
/// When the range is out of bounds, as slice indexing does.
pub fn merge_sort_range<T, C>(items: &mut [T], range: Range<usize>, comparator: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let active = &mut items[range];
    if active.len() < 2 {
        return;
    }
    let mut buffer = active.to_vec();
    sort(active, &mut buffer, comparator);
}

fn sort<T, C>(items: &mut [T], buffer: &mut [T], comparator: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    if items.len() < 2 {
        return;
    }
    let mid = items.len() / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_buffer, right_buffer) = buffer.split_at_mut(mid);
        sort(left, left_buffer, comparator);
        sort(right, right_buffer, comparator);
    }
    buffer.clone_from_slice(items);
    let (left, right) = buffer.split_at(mid);
    merge(left, right, items, comparator);
}

fn merge<T, C>(left: &[T], right: &[T], output: &mut [T], comparator: &C)
where
    T: Clone,
    C: Comparator<T> + ?Sized,
{
    let mut i = 0;
    let mut j = 0;
    for slot in output.iter_mut() {
        // right wins only when it strictly precedes, ties go to the left half
        let take_right = i == left.len()
            || (j < right.len() && comparator.precedes(&right[j], &left[i]));
        if take_right {
            slot.clone_from(&right[j]);
            j += 1;
        } else {
            slot.clone_from(&left[i]);
            i += 1;
        }
    }
}
