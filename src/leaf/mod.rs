//! Built-in leaf rules over untyped JSON input.
//!
//! The guards in this module turn a [`serde_json::Value`] into a typed Rust
//! value; the constraints refine typed values further. Every built-in rule
//! reports a [`Violation`], so they all compose with each other and with
//! [`Rule::shape`](crate::Rule::shape) and [`Rule::of`](crate::Rule::of),
//! which nest field and element errors into the same tree.
//!
//! # Examples
//!
//! ```
//! use rule_rail::leaf::{array, number, object, string, NumberRules, StringRules, Violation};
//! use rule_rail::record;
//! use serde_json::json;
//!
//! let order = object::<()>().shape(record! {
//!     "id" => string().not_empty().map(serde_json::Value::from).required(),
//!     "quantities" => array()
//!         .of(number().positive())
//!         .map(serde_json::Value::from)
//!         .required(),
//! });
//!
//! let errors = order
//!     .validate(json!({ "id": "", "quantities": [1, -2, 3] }))
//!     .into_error()
//!     .unwrap();
//!
//! assert_eq!(errors.count(), 2);
//! assert!(errors.field("quantities").and_then(|q| q.at(1)).is_some());
//! ```
pub mod constraint;
pub mod primitive;
pub mod reason;

pub use self::constraint::{
    contains_float, non_negative, not_empty, positive, NumberRules, StringRules,
};
pub use self::primitive::{
    array, boolean, from_boolean, from_number, from_string, number, object, present, string,
};
pub use self::reason::{Reason, Violation};
