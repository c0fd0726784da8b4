//! Predicate groups for combined filtering.
//!
//! A [`PredicateGroup`] holds an ordered list of predicates and the
//! [`Combinator`] that joins them. Groups are evaluated element by element with
//! short-circuiting, in list order.

use std::fmt;

use crate::text::TextMatch;

/// How the predicates of a [`PredicateGroup`] are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Combinator {
    /// Every predicate must hold. An empty group keeps every element.
    #[default]
    And,
    /// At least one predicate must hold. An empty group keeps nothing.
    Or,
    /// No predicate may hold. An empty group keeps every element.
    Not,
}

impl Combinator {
    /// Returns the display name of this combinator.
    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
            Combinator::Not => "not",
        }
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type BoxedPredicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// An ordered list of predicates joined by a single [`Combinator`].
///
/// # Example
///
/// ```
/// use standout_sequence::{PredicateGroup, Sequence};
///
/// let adults_named_a = PredicateGroup::and()
///     .with(|p: &(&str, u32)| p.1 >= 18)
///     .with(|p: &(&str, u32)| p.0.starts_with('A'));
///
/// let people = Sequence::from(vec![("Alice", 30), ("Anna", 12), ("Bob", 40)]);
/// let names: Vec<_> = people.filter_group(&adults_named_a).into_vec();
/// assert_eq!(names, vec![("Alice", 30)]);
/// ```
pub struct PredicateGroup<'a, T> {
    predicates: Vec<BoxedPredicate<'a, T>>,
    combinator: Combinator,
}

impl<'a, T> PredicateGroup<'a, T> {
    /// Creates an empty group with the given combinator.
    pub fn new(combinator: Combinator) -> Self {
        PredicateGroup {
            predicates: Vec::new(),
            combinator,
        }
    }

    /// Creates an empty AND group.
    pub fn and() -> Self {
        Self::new(Combinator::And)
    }

    /// Creates an empty OR group.
    pub fn or() -> Self {
        Self::new(Combinator::Or)
    }

    /// Creates an empty NOT group.
    pub fn not() -> Self {
        Self::new(Combinator::Not)
    }

    /// Appends a predicate. Predicates are evaluated in insertion order.
    pub fn with<P>(mut self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.predicates.push(Box::new(predicate));
        self
    }

    /// Appends a predicate in place.
    pub fn push<P>(&mut self, predicate: P)
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.predicates.push(Box::new(predicate));
    }

    /// Appends a string matcher as a predicate.
    pub fn with_text(self, matcher: TextMatch) -> Self
    where
        T: AsRef<str>,
    {
        self.with(move |item: &T| matcher.matches(item))
    }

    /// Returns the combinator joining this group's predicates.
    pub fn combinator(&self) -> Combinator {
        self.combinator
    }

    /// Returns the number of predicates in the group.
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    /// Returns `true` if the group holds no predicates.
    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    /// Tests a single element against the group.
    ///
    /// Evaluation stops at the first predicate that decides the outcome.
    pub fn matches(&self, item: &T) -> bool {
        match self.combinator {
            Combinator::And => self.predicates.iter().all(|p| p(item)),
            Combinator::Or => self.predicates.iter().any(|p| p(item)),
            Combinator::Not => !self.predicates.iter().any(|p| p(item)),
        }
    }
}

impl<T> Default for PredicateGroup<'_, T> {
    fn default() -> Self {
        Self::new(Combinator::default())
    }
}

impl<T> fmt::Debug for PredicateGroup<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateGroup")
            .field("combinator", &self.combinator)
            .field("predicates", &self.predicates.len())
            .finish()
    }
}
