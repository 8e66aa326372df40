//! Composable validation rules.
//!
//! A [`Rule`] turns an input into a [`Validated`](crate::Validated) outcome,
//! given some meta data shared by the whole composition. Rules are built
//! from small pieces:
//!
//! - [`Rule::compose`] - sequential composition, stops at the first failure
//! - [`Rule::test`] - independent [`Predicate`]s on one value, reports them all
//! - [`Rule::required`] / [`Rule::optional`] - presence handling for `Option` inputs
//! - [`Rule::many`] / [`Rule::of`] - element-wise validation of lists
//! - [`Rule::combine`] / [`Rule::shape`] / [`Rule::fields`] - field-wise
//!   validation of records and JSON objects
//! - [`Rule::lmap_meta`] / [`Rule::upcast_meta`] - reconciling meta types
//!
//! # Examples
//!
//! ```
//! use rule_rail::{Rule, Validated};
//!
//! let at_most: Rule<i32, String, i32, i32> = Rule::new(|n, max: &i32| {
//!     if n <= *max { Validated::ok(n) } else { Validated::error(format!("{n} > {max}")) }
//! });
//! let all = at_most.many();
//!
//! assert_eq!(all.apply(vec![1, 2], &2), Validated::ok(vec![1, 2]));
//! assert_eq!(all.apply(vec![3, 1], &2), Validated::error(vec![Some("3 > 2".to_string()), None]));
//! ```
pub mod collection;
pub mod core;
pub mod predicate;
pub mod presence;
pub mod shape;

pub use self::collection::{combine, many, traverse};
pub use self::core::Rule;
pub use self::predicate::Predicate;
pub use self::presence::{optional, required, Missing};
pub use self::shape::{field, Field, FieldRule, FieldSet, Object};
