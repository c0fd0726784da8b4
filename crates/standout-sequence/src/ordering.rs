//! Sorting support for sequences.
//!
//! Provides [`Dir`] for sort direction and the merge sort behind
//! [`Sequence::order_by`](crate::Sequence::order_by). The sort is driven by a
//! boolean less-than function rather than an [`Ordering`], so comparators that
//! are not strict weak orders still produce a deterministic result.

use std::cmp::Ordering;

/// Direction of a key-based sort, see
/// [`Sequence::order_by_key_dir`](crate::Sequence::order_by_key_dir).
///
/// Both directions are stable: elements with equal keys keep input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dir {
    /// Smallest key first.
    #[default]
    Asc,
    /// Largest key first.
    Desc,
}

impl Dir {
    /// Orients a key comparison; `Desc` flips `Less` and `Greater`.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Dir::Asc => ordering,
            Dir::Desc => ordering.reverse(),
        }
    }

    /// Name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Dir::Asc => "asc",
            Dir::Desc => "desc",
        }
    }
}

impl std::fmt::Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sorts `items` with a top-down merge sort.
///
/// While merging, the right-hand element is taken only when
/// `less(right, left)` holds, so elements the comparator does not separate
/// keep their input order.
pub(crate) fn merge_sort_by<T, F>(mut items: Vec<T>, less: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items;
    }

    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, less);
    let right = merge_sort_by(right, less);
    merge(left, right, less)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, less: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> bool,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => less(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }

    merged
}
