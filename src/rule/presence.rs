//! Presence checks: `required` and `optional`.
//!
//! A missing input is modelled as `None`. [`Rule::required`] rejects it with
//! the dedicated [`Missing`] error, [`Rule::optional`] accepts it as an
//! absent result; both delegate a present input to the wrapped rule.
use core::fmt;

use crate::rule::core::Rule;
use crate::validated::Validated;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Error reported when a required input is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Missing;

impl fmt::Display for Missing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value is missing")
    }
}

impl core::error::Error for Missing {}

impl<P, E, A, M> Rule<P, E, A, M>
where
    P: 'static,
    E: 'static,
    A: 'static,
    M: 'static,
{
    /// Rejects a missing input before the rule runs.
    ///
    /// `None` fails with [`Missing`] (converted into `E`) without invoking
    /// this rule; `Some(input)` is validated as usual.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rule::Missing;
    /// use rule_rail::{Rule, Validated};
    ///
    /// let even: Rule<i32, Missing, i32> = Rule::from_fn(Validated::ok);
    /// let required = even.required();
    ///
    /// assert_eq!(required.validate(Some(2)), Validated::ok(2));
    /// assert_eq!(required.validate(None), Validated::error(Missing));
    /// ```
    pub fn required(self) -> Rule<Option<P>, E, A, M>
    where
        E: From<Missing>,
    {
        Rule::new(move |input: Option<P>, meta| match input {
            Some(input) => self.apply(input, meta),
            None => Validated::Invalid(Missing.into()),
        })
    }

    /// Accepts a missing input as an absent result.
    ///
    /// `None` succeeds with `None` without invoking this rule; `Some(input)`
    /// is validated and its value wrapped in `Some`.
    pub fn optional(self) -> Rule<Option<P>, E, Option<A>, M> {
        Rule::new(move |input: Option<P>, meta| match input {
            Some(input) => self.apply(input, meta).map(Some),
            None => Validated::Valid(None),
        })
    }
}

/// A standalone presence check: unwraps `Some(input)` and fails with
/// [`Missing`] on `None`.
///
/// Compose it with a rule over the present value, whose error type must be
/// able to absorb [`Missing`].
///
/// # Examples
///
/// ```
/// use rule_rail::leaf::{positive, Reason, Violation};
/// use rule_rail::rule::required;
/// use rule_rail::Validated;
///
/// let rule = required::<f64, ()>().compose(positive());
/// assert_eq!(rule.validate(None), Validated::error(Violation::from(Reason::IsMissing)));
/// ```
pub fn required<P, M>() -> Rule<Option<P>, Missing, P, M>
where
    P: 'static,
    M: 'static,
{
    Rule::from_fn(|input: Option<P>| match input {
        Some(input) => Validated::Valid(input),
        None => Validated::Invalid(Missing),
    })
}

/// Function form of [`Rule::optional`].
pub fn optional<P, E, A, M>(rule: Rule<P, E, A, M>) -> Rule<Option<P>, E, Option<A>, M>
where
    P: 'static,
    E: 'static,
    A: 'static,
    M: 'static,
{
    rule.optional()
}
