//! Sequence - Chainable query operators for in-memory collections.
//!
//! Sequence wraps an ordered collection and offers a fluent set of operators
//! that build new sequences or produce scalar results. It supports:
//!
//! - Filtering by a single predicate or a predicate group (AND, OR, NOT)
//! - Projection to a different element type
//! - Stable ordering by comparator or key, skip/take and pagination
//! - Set operations with caller-supplied equality
//! - Aggregation, grouping and map conversion
//!
//! Every operator runs eagerly: each step materializes its result before the
//! next one starts.
//!
//! # Quick Start
//!
//! ```rust
//! use standout_sequence::{PredicateGroup, Sequence};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Person {
//!     name: &'static str,
//!     age: u32,
//!     gender: &'static str,
//! }
//!
//! let people = Sequence::from(vec![
//!     Person { name: "Alice", age: 30, gender: "F" },
//!     Person { name: "Bob", age: 25, gender: "M" },
//!     Person { name: "Grace", age: 35, gender: "F" },
//! ]);
//!
//! let older_women = PredicateGroup::and()
//!     .with(|p: &Person| p.age > 30)
//!     .with(|p: &Person| p.gender == "F");
//!
//! let names: Vec<&str> = people
//!     .clone()
//!     .filter_group(&older_women)
//!     .select(|p| p.name)
//!     .into_vec();
//! assert_eq!(names, vec!["Grace"]);
//!
//! assert_eq!(people.max(|p| i64::from(p.age)), 35);
//!
//! let by_gender = people.group_by(|p| p.gender);
//! assert_eq!(by_gender["F"].len(), 2);
//! ```
//!
//! # Boundary Behavior
//!
//! Operators never fail on empty or short input:
//!
//! | Operator | Empty / out of range |
//! |----------|----------------------|
//! | `first`, `last`, `element_at` | `None` |
//! | `sum`, `min`, `max` | `0` (`sum` wraps on overflow) |
//! | `aggregate` | the seed |
//! | `skip(n)`, `take(n)` | clamped to the length |
//!
//! The `try_sum`, `try_min`, `try_max`, `try_element_at` and `single`
//! companions return a [`Result`] instead, for callers that need to tell
//! "empty" apart from a legitimate zero or to catch overflow.
//!
//! # Set Operations
//!
//! | Operator | Result | Deduplicated |
//! |----------|--------|--------------|
//! | `distinct` | first occurrence of each value | yes |
//! | `union` | `self` then `other` | yes |
//! | `intersect` | elements of `self` with an equal in `other` | yes |
//! | `except` | elements of `self` with no equal in `other` | no |
//!
//! # Features
//!
//! - `regex` (default): [`TextMatch::regex`] and [`SequenceError::InvalidRegex`]
//! - `serde`: transparent `Serialize`/`Deserialize` for [`Sequence`]

mod convert;
mod error;
mod ordering;
mod predicate;
mod sequence;
mod set;
mod text;

// Re-export public API
pub use convert::{group_by, select, to_map};
pub use error::{Result, SequenceError};
pub use ordering::Dir;
pub use predicate::{Combinator, PredicateGroup};
pub use sequence::Sequence;
pub use text::{TextMatch, TextOp};
