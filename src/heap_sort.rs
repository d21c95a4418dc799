//! In-place heap sort.
//!
//! Not stable. Runs in O(n log n) time in the worst case with O(1) auxiliary space.

use std::ops::Range;

use crate::comparator::Comparator;

/// Sort the complete sequence.
pub fn heap_sort<T, C>(items: &mut [T], comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    let len = items.len();
    heap_sort_range(items, 0..len, comparator)
}

/// Sort the half-open `range` of `items`, leaving the rest untouched. An empty range is a no-op.
///
/// The heap keeps the element that sorts last at the root. It is repeatedly moved behind the
/// shrinking heap, so the range ends up ordered by `comparator`.
///
/// # Panics
/// When the range is out of bounds, as slice indexing does.
pub fn heap_sort_range<T, C>(items: &mut [T], range: Range<usize>, comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    let active = &mut items[range];
    let len = active.len();
    if len < 2 {
        return;
    }

    for root in (0..len / 2).rev() {
        sift_down(active, root, len, comparator);
    }

    for end in (1..len).rev() {
        active.swap(0, end);
        sift_down(active, 0, end, comparator);
    }
}

fn sift_down<T, C>(heap: &mut [T], mut root: usize, end: usize, comparator: &C)
where
    C: Comparator<T> + ?Sized,
{
    loop {
        let left = 2 * root + 1;
        if left >= end {
            break;
        }
        let mut last = root;
        if comparator.precedes(&heap[last], &heap[left]) {
            last = left;
        }
        let right = left + 1;
        if right < end && comparator.precedes(&heap[last], &heap[right]) {
            last = right;
        }
        if last == root {
            break;
        }
        heap.swap(root, last);
        root = last;
    }
}
