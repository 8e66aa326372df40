//! The result algebra and its aggregation helpers.
//!
//! This module provides [`Validated`], a two-variant outcome holding either a
//! validated value or an error payload, together with the helpers that merge
//! many outcomes into one while keeping *every* failure:
//!
//! - [`sequence`] - positional accumulation over a list, errors keep their index
//! - [`combine`] - keyed accumulation over a [`Record`](crate::types::Record)
//!
//! # Examples
//!
//! ```
//! use rule_rail::validated::{sequence, Validated};
//!
//! let results = vec![
//!     Validated::<&str, i32>::ok(1),
//!     Validated::error("bad"),
//!     Validated::ok(3),
//! ];
//!
//! assert_eq!(sequence(results), Validated::error(vec![None, Some("bad"), None]));
//! ```
pub mod aggregate;
pub mod core;
pub mod iter;

pub use self::aggregate::*;
pub use self::core::*;
pub use self::iter::*;
