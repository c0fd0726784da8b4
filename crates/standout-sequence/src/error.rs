//! Error types for the sequence crate.

use thiserror::Error;

/// Errors returned by the strict (`try_*`, `single`) sequence operations.
///
/// The lenient operations (`first`, `element_at`, `sum`, `min`, `max`) never
/// fail; they report absence through `Option` or a sentinel value, and `sum`
/// wraps on overflow.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// The operation needs at least one element.
    #[error("{operation} requires a non-empty sequence")]
    Empty { operation: &'static str },

    /// Index past the end of the sequence.
    #[error("index {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// No element satisfied the predicate.
    #[error("no element matches the predicate")]
    NoMatch,

    /// More than one element satisfied a predicate that expected exactly one.
    #[error("expected exactly one matching element, found {count}")]
    MultipleMatches { count: usize },

    /// An integer aggregate left the `i64` range.
    #[error("{operation} overflowed i64")]
    Overflow { operation: &'static str },

    /// Invalid regular expression pattern.
    #[cfg(feature = "regex")]
    #[error("invalid regex pattern: {0}")]
    InvalidRegex(#[from] regex::Error),
}

/// Result type for sequence operations.
pub type Result<T> = std::result::Result<T, SequenceError>;
