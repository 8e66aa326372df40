//! Constraints on already-typed numbers and strings.
use crate::leaf::reason::{Reason, Violation};
use crate::rule::Rule;
use crate::types::alloc_type::String;
use crate::validated::Validated;

/// Accepts numbers strictly greater than zero.
///
/// # Examples
///
/// ```
/// use rule_rail::leaf::{positive, Reason, Violation};
/// use rule_rail::Validated;
///
/// assert_eq!(positive::<()>().validate(4.0), Validated::ok(4.0));
/// assert_eq!(positive::<()>().validate(0.0), Validated::error(Violation::from(Reason::NotPositive(0.0))));
/// ```
pub fn positive<M: 'static>() -> Rule<f64, Violation, f64, M> {
    Rule::from_fn(|n: f64| {
        if n > 0.0 {
            Validated::Valid(n)
        } else {
            Validated::Invalid(Reason::NotPositive(n).into())
        }
    })
}

/// Accepts zero and numbers greater than zero.
pub fn non_negative<M: 'static>() -> Rule<f64, Violation, f64, M> {
    Rule::from_fn(|n: f64| {
        if n >= 0.0 {
            Validated::Valid(n)
        } else {
            Validated::Invalid(Reason::Negative(n).into())
        }
    })
}

/// Accepts non-empty strings.
pub fn not_empty<M: 'static>() -> Rule<String, Violation, String, M> {
    Rule::from_fn(|s: String| {
        if s.is_empty() {
            Validated::Invalid(Reason::EmptyString.into())
        } else {
            Validated::Valid(s)
        }
    })
}

/// Parses the floating point number a string starts with.
///
/// Leading whitespace is skipped and anything after the longest decimal
/// prefix is ignored, so `"12.5 kg"` yields `12.5`. The prefix is an
/// optionally signed decimal with an optional exponent, or the word
/// `Infinity`. Other spellings such as `inf` or `NaN` are not numbers.
///
/// # Examples
///
/// ```
/// use rule_rail::leaf::{contains_float, Reason, Violation};
/// use rule_rail::Validated;
///
/// let rule = contains_float::<()>();
/// assert_eq!(rule.validate(" 12.5 kg".into()), Validated::ok(12.5));
/// assert_eq!(rule.validate("-3e2".into()), Validated::ok(-300.0));
/// assert_eq!(
///     rule.validate("kg".into()),
///     Validated::error(Violation::from(Reason::DoesNotContainFloat("kg".into())))
/// );
/// ```
pub fn contains_float<M: 'static>() -> Rule<String, Violation, f64, M> {
    Rule::from_fn(|s: String| match leading_float(&s) {
        Some(n) => Validated::Valid(n),
        None => Validated::Invalid(Reason::DoesNotContainFloat(s).into()),
    })
}

const INFINITY: &str = "Infinity";

/// Finds the longest decimal prefix in one pass and parses only that slice.
fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |start: usize| {
        bytes
            .get(start..)
            .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with(INFINITY) {
        return s[..end + INFINITY.len()].parse().ok();
    }

    let integer = digits_from(end);
    end += integer;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);
        if integer == 0 && fraction == 0 {
            return None;
        }
        end += 1 + fraction;
    } else if integer == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits_from(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    s[..end].parse().ok()
}

/// Number constraints as methods on any rule producing an `f64`.
///
/// # Examples
///
/// ```
/// use rule_rail::leaf::{number, NumberRules};
/// use serde_json::json;
///
/// let amount = number::<()>().non_negative();
/// assert!(amount.validate(json!(0)).is_valid());
/// assert!(amount.validate(json!(-0.5)).is_invalid());
/// ```
pub trait NumberRules {
    /// Composes with [`positive`].
    fn positive(self) -> Self;
    /// Composes with [`non_negative`].
    fn non_negative(self) -> Self;
}

impl<P, M> NumberRules for Rule<P, Violation, f64, M>
where
    P: 'static,
    M: 'static,
{
    fn positive(self) -> Self {
        self.compose(positive())
    }

    fn non_negative(self) -> Self {
        self.compose(non_negative())
    }
}

/// String constraints as methods on any rule producing a `String`.
pub trait StringRules<P, M> {
    /// Composes with [`not_empty`].
    fn not_empty(self) -> Rule<P, Violation, String, M>;
    /// Composes with [`contains_float`].
    fn contains_float(self) -> Rule<P, Violation, f64, M>;
}

impl<P, M> StringRules<P, M> for Rule<P, Violation, String, M>
where
    P: 'static,
    M: 'static,
{
    fn not_empty(self) -> Rule<P, Violation, String, M> {
        self.compose(not_empty())
    }

    fn contains_float(self) -> Rule<P, Violation, f64, M> {
        self.compose(contains_float())
    }
}
