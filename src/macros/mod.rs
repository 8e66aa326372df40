//! Macros for building records.
//!
//! - [`macro@crate::record`] - Builds a [`Record`](crate::types::Record) from
//!   `key => value` pairs, keeping the order in which they are written. It is
//!   the usual way to declare the rule record handed to
//!   [`Rule::combine`](crate::Rule::combine) or [`Rule::shape`](crate::Rule::shape).
//!
//! # Examples
//!
//! ```
//! use rule_rail::leaf::{number, string};
//! use rule_rail::{record, Rule};
//! use serde_json::json;
//!
//! let person = rule_rail::leaf::object::<()>().shape(record! {
//!     "name" => string().map(serde_json::Value::from).required(),
//!     "age" => number().map(serde_json::Value::from).required(),
//! });
//!
//! assert!(person.validate(json!({ "name": "Ada", "age": 36 })).is_valid());
//! ```

/// Builds a [`Record`](crate::types::Record) from `key => value` pairs.
///
/// Keys may be anything convertible into a record key (`&'static str` or
/// `String`). Entries keep the order in which they are written; a repeated
/// key replaces the earlier value in place.
///
/// # Examples
///
/// ```
/// use rule_rail::record;
///
/// let record = record! { "koala" => 1, "tiger" => 2 };
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["koala", "tiger"]);
///
/// let empty: rule_rail::types::Record<i32> = record! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::types::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut record = $crate::types::Record::new();
        $(
            record.insert($key, $value);
        )+
        record
    }};
}

/// Emits a `tracing` event at TRACE level when the `tracing` feature is on,
/// and expands to nothing otherwise.
macro_rules! trace_event {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace_event;
