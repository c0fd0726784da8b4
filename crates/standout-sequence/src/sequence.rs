//! The [`Sequence`] container and its core operators.
//!
//! Transformations take the sequence by value and return a freshly built one,
//! so a sequence handed out by an earlier step can never change underneath the
//! caller. Terminal operations borrow when they only read.

use std::slice;
use std::vec;

use tracing::trace;

use crate::error::{Result, SequenceError};
use crate::ordering::{merge_sort_by, Dir};
use crate::predicate::PredicateGroup;

/// An ordered, in-memory sequence with chainable query operators.
///
/// # Example
///
/// ```
/// use standout_sequence::Sequence;
///
/// let numbers = Sequence::from(vec![5, 3, 8, 6, 2]);
///
/// let evens: Vec<i32> = numbers.clone().filter(|n| n % 2 == 0 && *n > 3).into_vec();
/// assert_eq!(evens, vec![8, 6]);
///
/// assert_eq!(numbers.sum(|n| i64::from(*n)), 24);
///
/// let top: Vec<i32> = numbers.order_by_descending(|a, b| a < b).take(3).into_vec();
/// assert_eq!(top, vec![8, 6, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Sequence { items: Vec::new() }
    }

    // ========================================================================
    // Filtering
    // ========================================================================

    /// Keeps the elements for which `predicate` returns `true`.
    ///
    /// Relative order is preserved.
    #[doc(alias = "where")]
    pub fn filter<P>(self, mut predicate: P) -> Self
    where
        P: FnMut(&T) -> bool,
    {
        self.items.into_iter().filter(|item| predicate(item)).collect()
    }

    /// Keeps the elements accepted by a [`PredicateGroup`].
    ///
    /// See [`Combinator`](crate::Combinator) for how each group kind treats an
    /// empty predicate list.
    #[doc(alias = "where_group")]
    pub fn filter_group(self, group: &PredicateGroup<'_, T>) -> Self {
        self.items
            .into_iter()
            .filter(|item| group.matches(item))
            .collect()
    }

    // ========================================================================
    // Element access and quantifiers
    // ========================================================================

    /// Returns `true` if any element satisfies `predicate`.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// Vacuously `true` for an empty sequence.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().all(predicate)
    }

    /// Returns the first element satisfying `predicate`.
    pub fn first<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(*item))
    }

    /// Returns the last element satisfying `predicate`.
    pub fn last<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().rev().find(|item| predicate(*item))
    }

    /// Returns the index of the first element satisfying `predicate`.
    pub fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().position(predicate)
    }

    /// Returns the only element satisfying `predicate`.
    ///
    /// Fails with [`SequenceError::NoMatch`] when nothing matches and with
    /// [`SequenceError::MultipleMatches`] when more than one element does.
    pub fn single<P>(&self, mut predicate: P) -> Result<&T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches = self.items.iter().filter(|item| predicate(*item));
        let found = matches.next().ok_or(SequenceError::NoMatch)?;
        let extra = matches.count();
        if extra > 0 {
            return Err(SequenceError::MultipleMatches { count: extra + 1 });
        }
        Ok(found)
    }

    /// Returns the element at `index`, or `None` when out of range.
    pub fn element_at(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the element at `index`, failing when out of range.
    pub fn try_element_at(&self, index: usize) -> Result<&T> {
        self.items.get(index).ok_or(SequenceError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Returns the number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the number of elements satisfying `predicate`.
    pub fn count_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().filter(|item| predicate(*item)).count()
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the sequence unchanged, or `[value]` if it is empty.
    pub fn default_if_empty(self, value: T) -> Self {
        if self.items.is_empty() {
            Sequence { items: vec![value] }
        } else {
            self
        }
    }

    // ========================================================================
    // Ordering and reshaping
    // ========================================================================

    /// Sorts ascending by a strict less-than function.
    ///
    /// The sort is stable: elements where neither `less(a, b)` nor
    /// `less(b, a)` holds keep their relative order.
    pub fn order_by<F>(self, less: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        trace!(len = self.items.len(), dir = %Dir::Asc, "order_by");
        Sequence {
            items: merge_sort_by(self.items, &less),
        }
    }

    /// Sorts descending by running [`order_by`](Self::order_by) with the
    /// negation of `less`.
    ///
    /// The negated comparator holds in both directions for equal elements,
    /// so each run of ties comes out in reverse input order, the same result
    /// as `order_by(less).reverse()`. Use
    /// [`order_by_key_descending`](Self::order_by_key_descending) when ties
    /// must stay in input order.
    pub fn order_by_descending<F>(self, less: F) -> Self
    where
        F: Fn(&T, &T) -> bool,
    {
        trace!(len = self.items.len(), dir = %Dir::Desc, "order_by");
        Sequence {
            items: merge_sort_by(self.items, &|a: &T, b: &T| !less(a, b)),
        }
    }

    /// Stable sort by an ordered key in the given direction.
    pub fn order_by_key_dir<K, F>(self, key: F, dir: Dir) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        trace!(len = self.items.len(), dir = %dir, "order_by_key");
        let less = |a: &T, b: &T| dir.apply(key(a).cmp(&key(b))).is_lt();
        Sequence {
            items: merge_sort_by(self.items, &less),
        }
    }

    /// Stable ascending sort by an ordered key.
    pub fn order_by_key<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.order_by_key_dir(key, Dir::Asc)
    }

    /// Stable descending sort by an ordered key.
    pub fn order_by_key_descending<K, F>(self, key: F) -> Self
    where
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.order_by_key_dir(key, Dir::Desc)
    }

    /// Drops the first `n` elements.
    ///
    /// Skipping past the end yields an empty sequence.
    pub fn skip(mut self, n: usize) -> Self {
        if n >= self.items.len() {
            return Sequence::new();
        }
        self.items.drain(..n);
        self
    }

    /// Keeps at most the first `n` elements.
    pub fn take(mut self, n: usize) -> Self {
        self.items.truncate(n);
        self
    }

    /// Returns the `index`-th page of `size` elements.
    ///
    /// Equivalent to `skip(index * size).take(size)`, saturating on overflow.
    pub fn page(self, index: usize, size: usize) -> Self {
        self.skip(index.saturating_mul(size)).take(size)
    }

    /// Reverses the element order.
    pub fn reverse(mut self) -> Self {
        self.items.reverse();
        self
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Sums an integer projection of each element. `0` when empty.
    ///
    /// Wraps around on overflow in every build profile; use
    /// [`try_sum`](Self::try_sum) to detect it.
    pub fn sum<F>(&self, selector: F) -> i64
    where
        F: FnMut(&T) -> i64,
    {
        self.items
            .iter()
            .map(selector)
            .fold(0i64, |acc, n| acc.wrapping_add(n))
    }

    /// Sums an integer projection, failing if the total leaves the `i64` range.
    pub fn try_sum<F>(&self, selector: F) -> Result<i64>
    where
        F: FnMut(&T) -> i64,
    {
        self.items
            .iter()
            .map(selector)
            .try_fold(0i64, |acc, n| acc.checked_add(n))
            .ok_or(SequenceError::Overflow { operation: "sum" })
    }

    /// Smallest integer projection, or `0` when the sequence is empty.
    ///
    /// The `0` is a sentinel and cannot be told apart from a real minimum of
    /// zero; use [`try_min`](Self::try_min) when that matters.
    pub fn min<F>(&self, selector: F) -> i64
    where
        F: FnMut(&T) -> i64,
    {
        self.items.iter().map(selector).min().unwrap_or(0)
    }

    /// Largest integer projection, or `0` when the sequence is empty.
    ///
    /// See [`min`](Self::min) for the caveat on the sentinel.
    pub fn max<F>(&self, selector: F) -> i64
    where
        F: FnMut(&T) -> i64,
    {
        self.items.iter().map(selector).max().unwrap_or(0)
    }

    /// Smallest integer projection, failing on an empty sequence.
    pub fn try_min<F>(&self, selector: F) -> Result<i64>
    where
        F: FnMut(&T) -> i64,
    {
        self.items
            .iter()
            .map(selector)
            .min()
            .ok_or(SequenceError::Empty { operation: "min" })
    }

    /// Largest integer projection, failing on an empty sequence.
    pub fn try_max<F>(&self, selector: F) -> Result<i64>
    where
        F: FnMut(&T) -> i64,
    {
        self.items
            .iter()
            .map(selector)
            .max()
            .ok_or(SequenceError::Empty { operation: "max" })
    }

    /// Left fold starting from `seed`.
    ///
    /// Returns `seed` unchanged for an empty sequence.
    pub fn aggregate<A, F>(&self, seed: A, accumulator: F) -> A
    where
        F: FnMut(A, &T) -> A,
    {
        self.items.iter().fold(seed, accumulator)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Returns the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns a copy of the elements.
    #[doc(alias = "to_slice")]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Unwraps the sequence into its elements.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Sequence::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Sequence { items }
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(items: &[T]) -> Self {
        Sequence {
            items: items.to_vec(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Sequence {
            items: Vec::from(items),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.items
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Sequence {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Sequence<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> AsRef<[T]> for Sequence<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}
