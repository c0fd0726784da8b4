//! Projection, grouping and map conversion.
//!
//! Each operator is available as a method on [`Sequence`] and as a free
//! function taking the sequence as its first argument.

use std::collections::HashMap;
use std::hash::Hash;

use crate::sequence::Sequence;

impl<T> Sequence<T> {
    /// Projects every element through `selector`, possibly changing its type.
    pub fn select<R, F>(self, selector: F) -> Sequence<R>
    where
        F: FnMut(T) -> R,
    {
        self.into_iter().map(selector).collect()
    }

    /// Groups elements by key.
    ///
    /// Elements keep their relative order inside each group. The iteration
    /// order of the groups themselves is unspecified.
    pub fn group_by<K, F>(self, mut key_selector: F) -> HashMap<K, Vec<T>>
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut groups: HashMap<K, Vec<T>> = HashMap::new();
        for item in self {
            groups.entry(key_selector(&item)).or_default().push(item);
        }
        groups
    }

    /// Builds a map from a key and a value projection.
    ///
    /// When two elements produce the same key, the later one wins.
    pub fn to_map<K, V, KF, VF>(
        &self,
        mut key_selector: KF,
        mut value_selector: VF,
    ) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: FnMut(&T) -> K,
        VF: FnMut(&T) -> V,
    {
        self.iter()
            .map(|item| (key_selector(item), value_selector(item)))
            .collect()
    }
}

/// Projects every element of `sequence` through `selector`.
pub fn select<T, R, F>(sequence: Sequence<T>, selector: F) -> Sequence<R>
where
    F: FnMut(T) -> R,
{
    sequence.select(selector)
}

/// Groups the elements of `sequence` by key.
pub fn group_by<T, K, F>(sequence: Sequence<T>, key_selector: F) -> HashMap<K, Vec<T>>
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    sequence.group_by(key_selector)
}

/// Builds a map from `sequence`; later elements overwrite earlier ones.
pub fn to_map<T, K, V, KF, VF>(
    sequence: &Sequence<T>,
    key_selector: KF,
    value_selector: VF,
) -> HashMap<K, V>
where
    K: Eq + Hash,
    KF: FnMut(&T) -> K,
    VF: FnMut(&T) -> V,
{
    sequence.to_map(key_selector, value_selector)
}
