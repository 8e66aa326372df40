//! Shared collection types.
//!
//! [`ErrorVec`] carries the "one or more errors" payload produced by leaf
//! rules and by [`test`](crate::Validated::test), [`Holes`] is the positional
//! error collection produced by array aggregation, and [`Record`] is the
//! insertion-ordered keyed collection produced by record aggregation.
//!
//! # Examples
//!
//! ```
//! use rule_rail::types::{ErrorVec, Holes, Record};
//!
//! let reasons: ErrorVec<&str> = smallvec::smallvec!["too short"];
//! let holes: Holes<&str> = vec![None, Some("bad"), None];
//! let record: Record<i32> = [("a", 1), ("b", 2)].into_iter().collect();
//!
//! assert_eq!(reasons.len(), 1);
//! assert_eq!(holes.iter().flatten().count(), 1);
//! assert_eq!(record.keys().collect::<Vec<_>>(), ["a", "b"]);
//! ```
use smallvec::SmallVec;

pub mod alloc_type;
pub mod record;

pub use record::*;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for a single element, which is the common case for a
/// leaf rule that failed exactly one check.
pub type ErrorVec<E> = SmallVec<[E; 1]>;

/// Positional error collection produced by array aggregation.
///
/// It always has the same length as the validated input. `None` marks a
/// *hole*: the element at that index validated successfully.
pub type Holes<E> = alloc_type::Vec<Option<E>>;
