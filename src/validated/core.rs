use core::convert::Infallible;

use crate::types::alloc_type::Vec;
use crate::types::ErrorVec;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::smallvec;

/// Outcome of a validation: either a valid value or an error payload.
///
/// `Validated<E, A>` is the result algebra every rule produces. Unlike
/// `Result`, it is meant to be *aggregated*: [`sequence`](Validated::sequence)
/// and [`combine`](Validated::combine) collect the failures of many
/// independent validations instead of stopping at the first one, and
/// [`test`](Validated::test) reports every failed constraint of a value.
///
/// The error payload is not restricted to one error. Leaf rules usually
/// report an [`ErrorVec`], array aggregation a positional
/// [`Holes`](crate::types::Holes) collection and record aggregation a keyed
/// [`Record`](crate::types::Record).
///
/// # Serde Support
///
/// `Validated` implements `Serialize` and `Deserialize` when `E` and `A` do.
///
/// # Type Parameters
///
/// * `E` - The error payload type
/// * `A` - The success value type
///
/// # Examples
///
/// ```
/// use rule_rail::Validated;
///
/// let valid = Validated::<&str, i32>::ok(42);
/// assert!(valid.is_valid());
///
/// let invalid = Validated::<&str, i32>::error("error");
/// assert!(invalid.is_invalid());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Validated<E, A> {
    Valid(A),
    Invalid(E),
}

impl<E, A> Validated<E, A> {
    /// Creates a valid value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// let v = Validated::<&str, i32>::ok(42);
    /// assert_eq!(v.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn ok(value: A) -> Self {
        Self::Valid(value)
    }

    /// Creates an invalid value carrying `error` as its payload, unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// let v = Validated::<&str, ()>::error("missing field");
    /// assert_eq!(v.into_error(), Some("missing field"));
    /// ```
    #[inline]
    pub fn error(error: E) -> Self {
        Self::Invalid(error)
    }

    /// Returns `true` if the validation holds a value.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Returns `true` if the validation holds an error payload.
    #[must_use]
    #[inline]
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Eliminates the validation into a single value.
    ///
    /// Every other combinator of this type can be expressed with `fold`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// let v = Validated::<&str, i32>::ok(2);
    /// assert_eq!(v.fold(|n| n * 10, |e| e.len() as i32), 20);
    /// ```
    #[inline]
    pub fn fold<B, F, G>(self, on_ok: F, on_error: G) -> B
    where
        F: FnOnce(A) -> B,
        G: FnOnce(E) -> B,
    {
        match self {
            Self::Valid(value) => on_ok(value),
            Self::Invalid(error) => on_error(error),
        }
    }

    /// Maps the valid value using the provided function.
    ///
    /// If the validation is invalid, the error is preserved unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// let v = Validated::<&str, &str>::ok("Cool");
    /// assert_eq!(v.map(str::len), Validated::ok(4));
    /// ```
    #[inline]
    pub fn map<B, F>(self, f: F) -> Validated<E, B>
    where
        F: FnOnce(A) -> B,
    {
        self.fold(|value| Validated::Valid(f(value)), Validated::Invalid)
    }

    /// Maps the error payload while preserving the success branch.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// let v = Validated::<&str, i32>::error("Nah");
    /// assert_eq!(v.map_err(str::len), Validated::error(3));
    /// ```
    #[inline]
    pub fn map_err<F, G>(self, f: G) -> Validated<F, A>
    where
        G: FnOnce(E) -> F,
    {
        self.fold(Validated::Valid, |error| Validated::Invalid(f(error)))
    }

    /// Sequences a dependent validation step.
    ///
    /// `f` runs only on a valid value. The error type of the step may differ
    /// from this one: the current error is converted into the step's error
    /// type, so the result can hold either kind of failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// fn parse(s: &str) -> Validated<String, i32> {
    ///     s.parse().map_or_else(|_| Validated::error(format!("{s} is not a number")), Validated::ok)
    /// }
    ///
    /// let parsed: Validated<String, i32> = Validated::<&str, &str>::ok("44").and_then(parse);
    /// assert_eq!(parsed, Validated::ok(44));
    ///
    /// let short_circuited: Validated<String, i32> =
    ///     Validated::<&str, &str>::error("OTHER_ERROR").and_then(parse);
    /// assert_eq!(short_circuited, Validated::error("OTHER_ERROR".to_string()));
    /// ```
    #[doc(alias = "flat_map")]
    #[inline]
    pub fn and_then<F, B, G>(self, f: G) -> Validated<F, B>
    where
        E: Into<F>,
        G: FnOnce(A) -> Validated<F, B>,
    {
        self.fold(f, |error| Validated::Invalid(error.into()))
    }

    /// Keeps a valid value only if `pred` holds, otherwise turns it into the
    /// error built by `to_error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// let even = |n: &i32| n % 2 == 0;
    /// let not_even = |n: i32| format!("{n} is not even");
    ///
    /// assert_eq!(Validated::<String, i32>::ok(2).filter(even, not_even), Validated::ok(2));
    /// assert_eq!(
    ///     Validated::<String, i32>::ok(3).filter(even, not_even),
    ///     Validated::error("3 is not even".to_string())
    /// );
    /// ```
    #[inline]
    pub fn filter<F, P, T>(self, pred: P, to_error: T) -> Validated<E, A>
    where
        F: Into<E>,
        P: FnOnce(&A) -> bool,
        T: FnOnce(A) -> F,
    {
        match self {
            Self::Valid(value) => {
                if pred(&value) {
                    Self::Valid(value)
                } else {
                    Self::Invalid(to_error(value).into())
                }
            }
            invalid => invalid,
        }
    }

    /// Runs every predicate against a valid value and reports all failures.
    ///
    /// Predicates do not short-circuit each other: each one is evaluated and
    /// every failure is collected, in the order the predicates were given.
    /// The value stays valid only if no predicate failed. An invalid
    /// validation is returned unchanged without running any predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::types::ErrorVec;
    /// use rule_rail::Validated;
    ///
    /// fn even(n: &i32) -> Validated<String, ()> {
    ///     if n % 2 == 0 { Validated::ok(()) } else { Validated::error(format!("{n} is not even")) }
    /// }
    ///
    /// fn positive(n: &i32) -> Validated<String, ()> {
    ///     if *n > 0 { Validated::ok(()) } else { Validated::error(format!("{n} is not positive")) }
    /// }
    ///
    /// let tested = Validated::<ErrorVec<String>, i32>::ok(-3).test([even, positive]);
    /// let errors = tested.into_error().unwrap();
    /// assert_eq!(errors.as_slice(), ["-3 is not even", "-3 is not positive"]);
    /// ```
    pub fn test<F, I, P>(self, predicates: I) -> Validated<E, A>
    where
        ErrorVec<F>: Into<E>,
        I: IntoIterator<Item = P>,
        P: FnOnce(&A) -> Validated<F, ()>,
    {
        match self {
            Self::Valid(value) => {
                let failures: ErrorVec<F> = predicates
                    .into_iter()
                    .filter_map(|predicate| predicate(&value).into_error())
                    .collect();
                if failures.is_empty() {
                    Self::Valid(value)
                } else {
                    Self::Invalid(failures.into())
                }
            }
            invalid => invalid,
        }
    }

    /// Turns any error into a valid fallback value.
    ///
    /// The result can no longer fail, which the [`Infallible`] error type
    /// records.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// let v = Validated::<i32, String>::error(3).recover(|n| format!("Now valid {n}"));
    /// assert_eq!(v.into_valid(), "Now valid 3");
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Validated<Infallible, A>
    where
        F: FnOnce(E) -> A,
    {
        Validated::Valid(self.fold(|value| value, f))
    }

    /// Returns `self` if valid, otherwise `alternative` verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// let first = Validated::<bool, i32>::error(false);
    /// assert_eq!(first.or(Validated::<u8, i32>::ok(4)), Validated::ok(4));
    /// ```
    #[inline]
    pub fn or<F>(self, alternative: Validated<F, A>) -> Validated<F, A> {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(_) => alternative,
        }
    }

    /// Calls `op` with the error if invalid, otherwise returns the value.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// let v = Validated::<&str, i32>::error("error");
    /// let res: Validated<&str, i32> = v.or_else(|_| Validated::ok(42));
    /// assert_eq!(res.into_value(), Some(42));
    /// ```
    #[inline]
    pub fn or_else<F, O>(self, op: O) -> Validated<F, A>
    where
        O: FnOnce(E) -> Validated<F, A>,
    {
        self.fold(Validated::Valid, op)
    }

    /// Converts from `&Validated<E, A>` to `Validated<&E, &A>`.
    #[inline]
    pub fn as_ref(&self) -> Validated<&E, &A> {
        match self {
            Self::Valid(value) => Validated::Valid(value),
            Self::Invalid(error) => Validated::Invalid(error),
        }
    }

    /// Borrows the valid value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&A> {
        match self {
            Self::Valid(value) => Some(value),
            Self::Invalid(_) => None,
        }
    }

    /// Borrows the error payload, if any.
    #[must_use]
    #[inline]
    pub fn error_ref(&self) -> Option<&E> {
        match self {
            Self::Valid(_) => None,
            Self::Invalid(error) => Some(error),
        }
    }

    /// Extracts the value, if valid.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<A> {
        self.fold(Some, |_| None)
    }

    /// Extracts the error payload, if invalid.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        self.fold(|_| None, Some)
    }

    /// Converts into a `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::Validated;
    ///
    /// assert_eq!(Validated::<&str, i32>::ok(42).to_result(), Ok(42));
    /// assert_eq!(Validated::<&str, i32>::error("bad").to_result(), Err("bad"));
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<A, E> {
        self.fold(Ok, Err)
    }
}

impl<E, A> Validated<ErrorVec<E>, A> {
    /// Creates an invalid value from a single error, wrapped in an [`ErrorVec`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::types::ErrorVec;
    /// use rule_rail::Validated;
    ///
    /// let v = Validated::<ErrorVec<&str>, ()>::invalid("missing field");
    /// assert_eq!(v.into_error().unwrap().len(), 1);
    /// ```
    #[inline]
    pub fn invalid(error: E) -> Self {
        Self::Invalid(smallvec![error])
    }

    /// Creates an invalid value from an iterator of errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::types::ErrorVec;
    /// use rule_rail::Validated;
    ///
    /// let v = Validated::<ErrorVec<&str>, ()>::invalid_many(["missing", "invalid"]);
    /// assert_eq!(v.into_error().unwrap().len(), 2);
    /// ```
    #[inline]
    pub fn invalid_many<I>(errors: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        Self::Invalid(errors.into_iter().collect())
    }

    /// Iterates over the accumulated errors; empty when valid.
    pub fn iter_errors(&self) -> core::slice::Iter<'_, E> {
        match self {
            Self::Valid(_) => Default::default(),
            Self::Invalid(errors) => errors.iter(),
        }
    }
}

impl<A> Validated<Infallible, A> {
    /// Extracts the value of a validation that cannot fail.
    #[inline]
    pub fn into_valid(self) -> A {
        match self {
            Self::Valid(value) => value,
            Self::Invalid(never) => match never {},
        }
    }
}

impl<E, A> From<Result<A, E>> for Validated<E, A> {
    #[inline]
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Self::Valid(value),
            Err(error) => Self::Invalid(error),
        }
    }
}

impl<E, A> From<Validated<E, A>> for Result<A, E> {
    #[inline]
    fn from(validated: Validated<E, A>) -> Self {
        validated.to_result()
    }
}

/// Collects the valid values of an iterator of validations, dropping failures.
///
/// Useful for partial processing where invalid entries are reported elsewhere.
pub fn valid_values<E, A, I>(validations: I) -> Vec<A>
where
    I: IntoIterator<Item = Validated<E, A>>,
{
    validations
        .into_iter()
        .filter_map(Validated::into_value)
        .collect()
}
