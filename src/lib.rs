//! Composable validation rules that accumulate every failure.
//!
//! `rule_rail` builds validators out of small rules. A [`Rule`] maps an input
//! to a [`Validated`] outcome: either the validated (possibly transformed)
//! value, or an error payload. Rules compose sequentially, where the first
//! failure wins, and in parallel over lists, records and JSON objects, where
//! *all* failures are collected into an error that mirrors the shape of the
//! input.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! depend on `rule_rail::*`, use the [`prelude`], or pick focused pieces.
//!
//! # Examples
//!
//! ## Validating untyped JSON
//!
//! ```
//! use rule_rail::leaf::{number, object, string, NumberRules, StringRules};
//! use rule_rail::rule::field;
//! use serde_json::json;
//!
//! #[derive(Debug, PartialEq)]
//! struct Product { name: String, price: f64 }
//!
//! let product = object::<()>()
//!     .fields((
//!         field("name", string().not_empty().required()),
//!         field("price", number().positive().required()),
//!     ))
//!     .map(|(name, price)| Product { name, price });
//!
//! let valid = product.validate(json!({ "name": "Carrot", "price": 0.5 }));
//! assert_eq!(valid.into_value(), Some(Product { name: "Carrot".into(), price: 0.5 }));
//!
//! let errors = product.validate(json!({ "name": "" })).into_error().unwrap();
//! assert_eq!(errors.count(), 2);
//! ```
//!
//! ## Accumulating results by hand
//!
//! ```
//! use rule_rail::Validated;
//! use rule_rail::types::Holes;
//!
//! let results = vec![Validated::<&str, i32>::ok(1), Validated::error("bad")];
//! let combined: Validated<Holes<&str>, Vec<i32>> = results.into_iter().collect();
//!
//! assert_eq!(combined, Validated::error(vec![None, Some("bad")]));
//! ```
//!
//! # Feature flags
//!
//! - `std`: builds against the standard library instead of `core` + `alloc`
//! - `serde`: `Serialize`/`Deserialize` for outcomes, records and errors
//! - `tracing`: `trace!` events from aggregation, composition and memoization
//! - `full`: all of the above
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Built-in rules over JSON values and typed primitives
pub mod leaf;
/// Record macro and internal logging hooks
pub mod macros;
/// Single-slot memoization of rules and functions
pub mod memoize;
/// Convenience re-exports for quick starts
pub mod prelude;
/// The rule type and its combinators
pub mod rule;
/// Extension traits for interop with `Result`
pub mod traits;
/// Shared collection types
pub mod types;
/// The result algebra and its aggregation helpers
pub mod validated;

pub use rule::Rule;
pub use traits::ResultExt;
pub use types::{ErrorVec, Holes, Record};
pub use validated::Validated;
