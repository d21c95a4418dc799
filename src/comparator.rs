use crate::talk::Talk;

/// A strict "sorts before" relation used to drive [merge_sort](crate::merge_sort) and
/// [heap_sort](crate::heap_sort).
///
/// Any closure `Fn(&T, &T) -> bool` is a comparator, so new orderings need no changes to the
/// sort code.
///
/// # Examples
/// ```
/// use conference_schedule::heap_sort::heap_sort;
/// let mut values = vec![3, 1, 2];
/// heap_sort(&mut values, &|a: &i32, b: &i32| a < b);
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
pub trait Comparator<T: ?Sized> {
    /// True when `a` must be placed before `b`.
    fn precedes(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn precedes(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Longer talks first. Talks of equal duration are equivalent.
#[derive(Clone, Copy, Debug, Default)]
pub struct DurationDescending;

impl Comparator<Talk> for DurationDescending {
    fn precedes(&self, a: &Talk, b: &Talk) -> bool {
        a.duration() > b.duration()
    }
}

/// By speaker surname, then by topic, both ascending. Given name and patronymic are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct AuthorTopicAscending;

impl Comparator<Talk> for AuthorTopicAscending {
    fn precedes(&self, a: &Talk, b: &Talk) -> bool {
        let a_surname = a.speaker().surname();
        let b_surname = b.speaker().surname();
        if a_surname != b_surname {
            a_surname < b_surname
        } else {
            a.topic() < b.topic()
        }
    }
}
