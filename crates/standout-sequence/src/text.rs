//! String matchers usable as predicates.
//!
//! A [`TextMatch`] pairs a [`TextOp`] with a pattern and tests any
//! `AsRef<str>` value against it. Matchers plug into [`Sequence::filter`]
//! through a closure, or into a group with [`PredicateGroup::with_text`].
//!
//! [`Sequence::filter`]: crate::Sequence::filter
//! [`PredicateGroup::with_text`]: crate::PredicateGroup::with_text

#[cfg(feature = "regex")]
use regex::Regex;

#[cfg(feature = "regex")]
use crate::error::Result;

/// String comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextOp {
    /// Exact match.
    Eq,
    /// Anything but an exact match.
    Ne,
    /// String starts with the pattern.
    StartsWith,
    /// String ends with the pattern.
    EndsWith,
    /// String contains the pattern.
    Contains,
    /// String matches the regular expression.
    #[cfg(feature = "regex")]
    Regex,
}

impl TextOp {
    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            TextOp::Eq => "eq",
            TextOp::Ne => "ne",
            TextOp::StartsWith => "startswith",
            TextOp::EndsWith => "endswith",
            TextOp::Contains => "contains",
            #[cfg(feature = "regex")]
            TextOp::Regex => "regex",
        }
    }
}

impl std::fmt::Display for TextOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// One variant per operator, so the pattern kind always agrees with the op.
#[derive(Debug, Clone)]
enum Pattern {
    Eq(String),
    Ne(String),
    StartsWith(String),
    EndsWith(String),
    Contains(String),
    #[cfg(feature = "regex")]
    Regex(Regex),
}

/// A string predicate: an operator and the pattern it compares against.
///
/// # Example
///
/// ```
/// use standout_sequence::{Sequence, TextMatch};
///
/// let urgent = TextMatch::contains("urgent");
/// let titles = Sequence::from(vec!["urgent: fix", "docs", "very urgent"]);
///
/// let hits = titles.filter(|t| urgent.matches(t)).into_vec();
/// assert_eq!(hits, vec!["urgent: fix", "very urgent"]);
/// ```
#[derive(Debug, Clone)]
pub struct TextMatch {
    pattern: Pattern,
}

impl TextMatch {
    /// Matches strings equal to `pattern`.
    pub fn equals(pattern: impl Into<String>) -> Self {
        TextMatch {
            pattern: Pattern::Eq(pattern.into()),
        }
    }

    /// Matches strings not equal to `pattern`.
    pub fn not_equals(pattern: impl Into<String>) -> Self {
        TextMatch {
            pattern: Pattern::Ne(pattern.into()),
        }
    }

    /// Matches strings starting with `pattern`.
    pub fn starts_with(pattern: impl Into<String>) -> Self {
        TextMatch {
            pattern: Pattern::StartsWith(pattern.into()),
        }
    }

    /// Matches strings ending with `pattern`.
    pub fn ends_with(pattern: impl Into<String>) -> Self {
        TextMatch {
            pattern: Pattern::EndsWith(pattern.into()),
        }
    }

    /// Matches strings containing `pattern`.
    pub fn contains(pattern: impl Into<String>) -> Self {
        TextMatch {
            pattern: Pattern::Contains(pattern.into()),
        }
    }

    /// Matches strings against a regular expression.
    ///
    /// Returns an error if the pattern is invalid.
    #[cfg(feature = "regex")]
    pub fn regex(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(TextMatch {
            pattern: Pattern::Regex(regex),
        })
    }

    /// Returns the operator of this matcher.
    pub fn op(&self) -> TextOp {
        match &self.pattern {
            Pattern::Eq(_) => TextOp::Eq,
            Pattern::Ne(_) => TextOp::Ne,
            Pattern::StartsWith(_) => TextOp::StartsWith,
            Pattern::EndsWith(_) => TextOp::EndsWith,
            Pattern::Contains(_) => TextOp::Contains,
            #[cfg(feature = "regex")]
            Pattern::Regex(_) => TextOp::Regex,
        }
    }

    /// Tests a value against this matcher.
    pub fn matches<S>(&self, value: &S) -> bool
    where
        S: AsRef<str> + ?Sized,
    {
        let value = value.as_ref();
        match &self.pattern {
            Pattern::Eq(pattern) => value == pattern.as_str(),
            Pattern::Ne(pattern) => value != pattern.as_str(),
            Pattern::StartsWith(pattern) => value.starts_with(pattern.as_str()),
            Pattern::EndsWith(pattern) => value.ends_with(pattern.as_str()),
            Pattern::Contains(pattern) => value.contains(pattern.as_str()),
            #[cfg(feature = "regex")]
            Pattern::Regex(regex) => regex.is_match(value),
        }
    }
}
