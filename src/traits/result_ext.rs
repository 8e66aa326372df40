//! Extension trait for moving between `Result` and [`Validated`].
//!
//! Code that already speaks `Result` (parsers, `TryFrom` conversions, `?`
//! chains) can feed a rule without a hand-written `match`.
//!
//! # Examples
//!
//! ```
//! use rule_rail::traits::ResultExt;
//! use rule_rail::{Rule, Validated};
//!
//! let port: Rule<String, String, u16> =
//!     Rule::from_fn(|s: String| s.parse::<u16>().map_err(|e| e.to_string()).into_validated());
//!
//! assert_eq!(port.validate("8080".into()), Validated::ok(8080));
//! assert!(port.validate("http".into()).is_invalid());
//! ```
use crate::types::ErrorVec;
use crate::validated::Validated;

/// Conversion of a `Result` into a [`Validated`].
pub trait ResultExt<T, E> {
    /// `Ok` becomes `Valid`, `Err` becomes `Invalid`.
    fn into_validated(self) -> Validated<E, T>;

    /// Like [`into_validated`](ResultExt::into_validated), with the error
    /// wrapped into a one-element [`ErrorVec`] so it can be accumulated.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::traits::ResultExt;
    ///
    /// let parsed: Result<i32, &str> = Err("not a number");
    /// let errors = parsed.into_validated_vec().into_error().unwrap();
    /// assert_eq!(errors.as_slice(), ["not a number"]);
    /// ```
    fn into_validated_vec(self) -> Validated<ErrorVec<E>, T>;
}

impl<T, E> ResultExt<T, E> for Result<T, E> {
    #[inline]
    fn into_validated(self) -> Validated<E, T> {
        self.into()
    }

    #[inline]
    fn into_validated_vec(self) -> Validated<ErrorVec<E>, T> {
        match self {
            Ok(value) => Validated::Valid(value),
            Err(error) => Validated::invalid(error),
        }
    }
}
