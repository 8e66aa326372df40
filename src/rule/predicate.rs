//! Independent constraints attached to an already-typed value.
use core::fmt;

use crate::rule::core::Rule;
use crate::types::alloc_type::{Rc, Vec};
use crate::types::ErrorVec;
use crate::validated::Validated;

/// A named check of a value that reports a failure but produces no value.
///
/// Predicates are what [`Rule::test`] runs: each one sees the value and the
/// meta data of the enclosing rule, and returns `Validated<F, ()>`.
///
/// # Examples
///
/// ```
/// use rule_rail::rule::Predicate;
/// use rule_rail::Validated;
///
/// let even = Predicate::<i32, String>::ensure(|n| n % 2 == 0, |n| format!("{n} is not even"));
///
/// assert!(even.check(&4, &()).is_valid());
/// assert_eq!(even.check(&3, &()), Validated::error("3 is not even".to_string()));
/// ```
pub struct Predicate<A, F, M = ()> {
    check: Rc<dyn Fn(&A, &M) -> Validated<F, ()>>,
}

impl<A, F, M> Clone for Predicate<A, F, M> {
    fn clone(&self) -> Self {
        Self {
            check: Rc::clone(&self.check),
        }
    }
}

impl<A, F, M> fmt::Debug for Predicate<A, F, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate").finish_non_exhaustive()
    }
}

impl<A, F, M> Predicate<A, F, M>
where
    A: 'static,
    F: 'static,
    M: 'static,
{
    /// Creates a predicate from a check of the value and the meta data.
    pub fn new<C>(check: C) -> Self
    where
        C: Fn(&A, &M) -> Validated<F, ()> + 'static,
    {
        Self {
            check: Rc::new(check),
        }
    }

    /// Creates a predicate from a check of the value alone.
    pub fn from_fn<C>(check: C) -> Self
    where
        C: Fn(&A) -> Validated<F, ()> + 'static,
    {
        Self::new(move |value, _meta| check(value))
    }

    /// Creates a predicate that fails with `to_error(value)` when `holds`
    /// returns `false`.
    pub fn ensure<H, T>(holds: H, to_error: T) -> Self
    where
        H: Fn(&A) -> bool + 'static,
        T: Fn(&A) -> F + 'static,
    {
        Self::from_fn(move |value| {
            if holds(value) {
                Validated::Valid(())
            } else {
                Validated::Invalid(to_error(value))
            }
        })
    }

    /// Uses a rule as a predicate, discarding the value it produces.
    pub fn from_rule<B>(rule: Rule<A, F, B, M>) -> Self
    where
        A: Clone,
        B: 'static,
    {
        Self::new(move |value: &A, meta| rule.apply(value.clone(), meta).map(|_| ()))
    }

    /// Runs the check.
    #[inline]
    pub fn check(&self, value: &A, meta: &M) -> Validated<F, ()> {
        (self.check)(value, meta)
    }
}

impl<P, E, A, M> Rule<P, E, A, M>
where
    P: 'static,
    E: 'static,
    A: 'static,
    M: 'static,
{
    /// Attaches independent constraints to the value this rule produces.
    ///
    /// On success every predicate runs with the same meta data, and all of
    /// their failures are reported together, in declaration order. A failure
    /// of this rule itself is passed through without running any predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::rule::Predicate;
    /// use rule_rail::types::ErrorVec;
    /// use rule_rail::{Rule, Validated};
    ///
    /// let even = Predicate::ensure(|n: &i32| n % 2 == 0, |n| format!("{n} is not even"));
    /// let positive = Predicate::ensure(|n: &i32| *n > 0, |n| format!("{n} is not positive"));
    ///
    /// let rule: Rule<i32, ErrorVec<String>, i32> = Rule::identity().test([even, positive]);
    ///
    /// assert_eq!(rule.validate(2), Validated::ok(2));
    /// assert_eq!(rule.validate(-3).into_error().unwrap().len(), 2);
    /// ```
    pub fn test<F, I>(self, predicates: I) -> Self
    where
        F: 'static,
        ErrorVec<F>: Into<E>,
        I: IntoIterator<Item = Predicate<A, F, M>>,
    {
        let predicates: Vec<Predicate<A, F, M>> = predicates.into_iter().collect();
        Rule::new(move |input, meta| {
            self.apply(input, meta).test(
                predicates
                    .iter()
                    .map(|predicate| move |value: &A| predicate.check(value, meta)),
            )
        })
    }

    /// Uses this rule as a [`Predicate`] over borrowed inputs.
    pub fn as_predicate(self) -> Predicate<P, E, M>
    where
        P: Clone,
    {
        Predicate::from_rule(self)
    }
}
