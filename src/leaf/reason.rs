use core::convert::Infallible;
use core::fmt;

use serde_json::Value;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::rule::Missing;
use crate::types::alloc_type::String;
use crate::types::{ErrorVec, Holes, Record};

/// Why a single leaf check failed.
///
/// Each variant has a stable code (see [`Reason::code`]) and, where useful,
/// carries the offending value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Reason {
    /// The input was absent (or JSON `null` where presence was required).
    IsMissing,
    /// The input was not a JSON boolean.
    NotABoolean(Value),
    /// The input was not a JSON number.
    NotANumber(Value),
    /// The input was not a JSON string.
    NotAString(Value),
    /// The input was not a JSON array.
    NotAnArray(Value),
    /// The input was not a JSON object.
    NotAnObject(Value),
    /// The number was zero or negative.
    NotPositive(f64),
    /// The number was negative.
    Negative(f64),
    /// The string was empty.
    EmptyString,
    /// The string does not start with a floating point number.
    DoesNotContainFloat(String),
}

impl Reason {
    /// Returns the stable, machine-readable code of this reason.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::leaf::Reason;
    ///
    /// assert_eq!(Reason::NotPositive(-4.0).code(), "NOT_POSITIVE");
    /// assert_eq!(Reason::IsMissing.code(), "IS_MISSING");
    /// ```
    pub const fn code(&self) -> &'static str {
        match self {
            Self::IsMissing => "IS_MISSING",
            Self::NotABoolean(_) => "NOT_A_BOOLEAN",
            Self::NotANumber(_) => "NOT_A_NUMBER",
            Self::NotAString(_) => "NOT_A_STRING",
            Self::NotAnArray(_) => "NOT_AN_ARRAY",
            Self::NotAnObject(_) => "NOT_AN_OBJECT",
            Self::NotPositive(_) => "NOT_POSITIVE",
            Self::Negative(_) => "NEGATIVE",
            Self::EmptyString => "EMPTY_STRING",
            Self::DoesNotContainFloat(_) => "DOES_NOT_CONTAIN_FLOAT",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IsMissing => f.write_str("value is missing"),
            Self::NotABoolean(value) => write!(f, "expected a boolean, got {value}"),
            Self::NotANumber(value) => write!(f, "expected a number, got {value}"),
            Self::NotAString(value) => write!(f, "expected a string, got {value}"),
            Self::NotAnArray(value) => write!(f, "expected an array, got {value}"),
            Self::NotAnObject(value) => write!(f, "expected an object, got {value}"),
            Self::NotPositive(n) => write!(f, "{n} is not positive"),
            Self::Negative(n) => write!(f, "{n} is negative"),
            Self::EmptyString => f.write_str("string is empty"),
            Self::DoesNotContainFloat(s) => write!(f, "{s:?} does not contain a float"),
        }
    }
}

impl core::error::Error for Reason {}

/// Structured error of the built-in leaf rules.
///
/// The tree mirrors the shape of the validated input: a leaf failure holds
/// one or more [`Reason`]s, an array failure holds positional element
/// errors, and an object failure holds keyed field errors.
///
/// # Examples
///
/// ```
/// use rule_rail::leaf::{Reason, Violation};
/// use rule_rail::record;
///
/// let violation = Violation::from(record! {
///     "age" => Violation::from(Reason::NotPositive(-1.0)),
///     "tags" => Violation::from(vec![None, Some(Violation::from(Reason::EmptyString))]),
/// });
///
/// assert_eq!(violation.count(), 2);
/// assert_eq!(
///     violation.field("tags").and_then(|tags| tags.at(1)).and_then(Violation::reasons),
///     Some(&[Reason::EmptyString][..])
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Violation {
    /// Failed checks on a single value.
    Reasons(ErrorVec<Reason>),
    /// Element errors of an array, `None` at each valid index.
    Elements(Holes<Violation>),
    /// Field errors of an object, holding only the failing fields.
    Fields(Record<Violation>),
}

impl Violation {
    /// Leaf reasons, if this is a leaf failure.
    pub fn reasons(&self) -> Option<&[Reason]> {
        match self {
            Self::Reasons(reasons) => Some(reasons.as_slice()),
            _ => None,
        }
    }

    /// The error of the element at `index`, if this is an array failure and
    /// that element failed.
    pub fn at(&self, index: usize) -> Option<&Violation> {
        match self {
            Self::Elements(elements) => elements.get(index).and_then(Option::as_ref),
            _ => None,
        }
    }

    /// The error of field `key`, if this is an object failure and that
    /// field failed.
    pub fn field(&self, key: &str) -> Option<&Violation> {
        match self {
            Self::Fields(fields) => fields.get(key),
            _ => None,
        }
    }

    /// Total number of leaf reasons in the tree.
    pub fn count(&self) -> usize {
        match self {
            Self::Reasons(reasons) => reasons.len(),
            Self::Elements(elements) => elements.iter().flatten().map(Violation::count).sum(),
            Self::Fields(fields) => fields.values().map(Violation::count).sum(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reasons(reasons) => {
                for (i, reason) in reasons.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{reason}")?;
                }
                Ok(())
            }
            Self::Elements(elements) => {
                let mut first = true;
                for (index, error) in elements.iter().enumerate() {
                    if let Some(error) = error {
                        if !first {
                            f.write_str("; ")?;
                        }
                        first = false;
                        write!(f, "[{index}]: {error}")?;
                    }
                }
                Ok(())
            }
            Self::Fields(fields) => {
                for (i, (key, error)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{key}: {error}")?;
                }
                Ok(())
            }
        }
    }
}

impl core::error::Error for Violation {}

impl From<Reason> for Violation {
    fn from(reason: Reason) -> Self {
        Self::Reasons(smallvec::smallvec![reason])
    }
}

impl From<Missing> for Violation {
    fn from(_: Missing) -> Self {
        Reason::IsMissing.into()
    }
}

impl From<Infallible> for Violation {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

impl From<ErrorVec<Reason>> for Violation {
    fn from(reasons: ErrorVec<Reason>) -> Self {
        Self::Reasons(reasons)
    }
}

impl From<Holes<Violation>> for Violation {
    fn from(elements: Holes<Violation>) -> Self {
        Self::Elements(elements)
    }
}

impl From<Record<Violation>> for Violation {
    fn from(fields: Record<Violation>) -> Self {
        Self::Fields(fields)
    }
}
