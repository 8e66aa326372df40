//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use rule_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`record!`](crate::record)
//! - **Types**: [`Rule`], [`Validated`], [`Record`], [`ErrorVec`], [`Holes`], [`Predicate`]
//! - **Leaf errors**: [`Reason`], [`Violation`], [`Missing`]
//! - **Traits**: [`NumberRules`], [`StringRules`], [`ResultExt`]
//!
//! # Examples
//!
//! ```
//! use rule_rail::prelude::*;
//! use rule_rail::leaf::{array, number};
//! use serde_json::json;
//!
//! let amounts = array::<()>().of(number().non_negative());
//!
//! assert_eq!(amounts.validate(json!([0, 2.5])), Validated::ok(vec![0.0, 2.5]));
//! assert_eq!(
//!     amounts.validate(json!([1, -1])),
//!     Validated::error(Violation::from(vec![None, Some(Violation::from(Reason::Negative(-1.0)))]))
//! );
//! ```

// Macros
pub use crate::record;

// Core types
pub use crate::rule::{Missing, Predicate, Rule};
pub use crate::types::{ErrorVec, Holes, Record};
pub use crate::validated::Validated;

// Leaf errors
pub use crate::leaf::{Reason, Violation};

// Traits
pub use crate::leaf::{NumberRules, StringRules};
pub use crate::traits::ResultExt;
