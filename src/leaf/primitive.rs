//! Type guards over untyped JSON input.
//!
//! Each guard accepts a [`Value`] of one JSON type and yields the matching
//! Rust value, or fails with a [`Reason`] that carries the rejected value.
//! All guards are generic over the meta type, so they slot into any
//! composition.
use core::convert::Infallible;

use serde_json::{Map, Value};

use crate::leaf::reason::{Reason, Violation};
use crate::rule::Rule;
use crate::types::alloc_type::{String, Vec};
use crate::validated::Validated;

/// Accepts a JSON boolean.
pub fn boolean<M: 'static>() -> Rule<Value, Violation, bool, M> {
    Rule::from_fn(|value: Value| match value {
        Value::Bool(b) => Validated::Valid(b),
        other => Validated::Invalid(Reason::NotABoolean(other).into()),
    })
}

/// Accepts a JSON number, as an `f64`.
///
/// # Examples
///
/// ```
/// use rule_rail::leaf::{number, Reason, Violation};
/// use rule_rail::Validated;
/// use serde_json::json;
///
/// let rule = number::<()>();
/// assert_eq!(rule.validate(json!(-5)), Validated::ok(-5.0));
/// assert_eq!(
///     rule.validate(json!("Carrot")),
///     Validated::error(Violation::from(Reason::NotANumber(json!("Carrot"))))
/// );
/// ```
pub fn number<M: 'static>() -> Rule<Value, Violation, f64, M> {
    Rule::from_fn(|value: Value| match value.as_f64() {
        Some(n) => Validated::Valid(n),
        None => Validated::Invalid(Reason::NotANumber(value).into()),
    })
}

/// Accepts a JSON string.
pub fn string<M: 'static>() -> Rule<Value, Violation, String, M> {
    Rule::from_fn(|value: Value| match value {
        Value::String(s) => Validated::Valid(s),
        other => Validated::Invalid(Reason::NotAString(other).into()),
    })
}

/// Accepts a JSON array, yielding its elements for [`Rule::of`].
pub fn array<M: 'static>() -> Rule<Value, Violation, Vec<Value>, M> {
    Rule::from_fn(|value: Value| match value {
        Value::Array(items) => Validated::Valid(items),
        other => Validated::Invalid(Reason::NotAnArray(other).into()),
    })
}

/// Accepts a JSON object, yielding its fields for [`Rule::shape`] and
/// [`Rule::fields`].
pub fn object<M: 'static>() -> Rule<Value, Violation, Map<String, Value>, M> {
    Rule::from_fn(|value: Value| match value {
        Value::Object(fields) => Validated::Valid(fields),
        other => Validated::Invalid(Reason::NotAnObject(other).into()),
    })
}

/// Rejects an absent value and JSON `null` alike.
///
/// Use it in front of a guard where `null` must not pass as a value;
/// [`Rule::required`] only rejects an absent one.
///
/// # Examples
///
/// ```
/// use rule_rail::leaf::{present, Reason, Violation};
/// use rule_rail::Validated;
/// use serde_json::{json, Value};
///
/// let rule = present::<()>();
/// assert_eq!(rule.validate(Some(json!(0))), Validated::ok(json!(0)));
/// assert_eq!(rule.validate(Some(Value::Null)), Validated::error(Violation::from(Reason::IsMissing)));
/// assert_eq!(rule.validate(None), Validated::error(Violation::from(Reason::IsMissing)));
/// ```
pub fn present<M: 'static>() -> Rule<Option<Value>, Violation, Value, M> {
    Rule::from_fn(|value: Option<Value>| match value {
        None | Some(Value::Null) => Validated::Invalid(Reason::IsMissing.into()),
        Some(value) => Validated::Valid(value),
    })
}

/// Entry point for rules over values already typed as `f64`.
pub fn from_number<M: 'static>() -> Rule<f64, Infallible, f64, M> {
    Rule::identity()
}

/// Entry point for rules over values already typed as `String`.
pub fn from_string<M: 'static>() -> Rule<String, Infallible, String, M> {
    Rule::identity()
}

/// Entry point for rules over values already typed as `bool`.
pub fn from_boolean<M: 'static>() -> Rule<bool, Infallible, bool, M> {
    Rule::identity()
}
