//! Set operations over sequences.
//!
//! Equality is always supplied by the caller as `Fn(&T, &T) -> bool`; no
//! `PartialEq` or `Hash` bound is assumed. Membership is checked by linear
//! scan, so these operators are quadratic in the worst case.
//!
//! Every operator takes `other` as any `IntoIterator<Item = T>`. The
//! filtering operators collect it once and scan it per element.
//!
//! [`Sequence::union`] and [`Sequence::intersect`] deduplicate their result,
//! [`Sequence::except`] does not.

use tracing::trace;

use crate::sequence::Sequence;

fn contains<T, E>(items: &[T], item: &T, equal: &E) -> bool
where
    E: Fn(&T, &T) -> bool,
{
    items.iter().any(|other| equal(item, other))
}

impl<T> Sequence<T> {
    /// Removes elements equal to an earlier element.
    ///
    /// The first occurrence of each value is kept, in input order.
    pub fn distinct<E>(self, equal: E) -> Self
    where
        E: Fn(&T, &T) -> bool,
    {
        let input = self.len();
        let mut kept: Vec<T> = Vec::with_capacity(input);
        for item in self {
            if !contains(&kept, &item, &equal) {
                kept.push(item);
            }
        }
        trace!(input, output = kept.len(), "distinct");
        Sequence::from(kept)
    }

    /// Appends `other` and removes duplicates.
    ///
    /// Elements of `self` come first, then those of `other`, each value at
    /// its first occurrence.
    pub fn union<I, E>(mut self, other: I, equal: E) -> Self
    where
        I: IntoIterator<Item = T>,
        E: Fn(&T, &T) -> bool,
    {
        self.extend(other);
        self.distinct(equal)
    }

    /// Keeps elements that have an equal in `other`, then removes duplicates.
    pub fn intersect<I, E>(self, other: I, equal: E) -> Self
    where
        I: IntoIterator<Item = T>,
        E: Fn(&T, &T) -> bool,
    {
        let input = self.len();
        let other: Vec<T> = other.into_iter().collect();
        let shared = self.filter(|item| contains(&other, item, &equal));
        trace!(input, other = other.len(), shared = shared.len(), "intersect");
        shared.distinct(equal)
    }

    /// Keeps elements that have no equal in `other`.
    ///
    /// Duplicates in `self` are all retained.
    pub fn except<I, E>(self, other: I, equal: E) -> Self
    where
        I: IntoIterator<Item = T>,
        E: Fn(&T, &T) -> bool,
    {
        let input = self.len();
        let other: Vec<T> = other.into_iter().collect();
        let remaining = self.filter(|item| !contains(&other, item, &equal));
        trace!(input, other = other.len(), output = remaining.len(), "except");
        remaining
    }

    /// Appends `other` without removing duplicates.
    pub fn concat<I>(mut self, other: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.extend(other);
        self
    }
}
