use core::borrow::Borrow;
use core::convert::Infallible;
use core::fmt;

use crate::macros::trace_event;
use crate::types::alloc_type::Rc;
use crate::validated::Validated;

type RuleFn<P, E, A, M> = dyn Fn(P, &M) -> Validated<E, A>;

/// A reusable, composable validator from an input `P` to a [`Validated<E, A>`].
///
/// A rule wraps a pure function `(input, &meta) -> Validated<E, A>`. Rules
/// are built once, usually by composing smaller rules, and applied many
/// times. Cloning a rule is cheap: it only bumps a reference count.
///
/// # Type Parameters
///
/// * `P` - The accepted input type
/// * `E` - The error payload produced on failure
/// * `A` - The value produced on success
/// * `M` - Auxiliary *meta* data (a tuple, a context struct, or `()`) handed
///   unchanged to every rule of a composition
///
/// # Threading
///
/// Rules are single-threaded values (`!Send`, `!Sync`): the library targets
/// request/response validation on one thread, and memoized rules keep an
/// interior cache slot.
///
/// # Examples
///
/// ```
/// use rule_rail::{Rule, Validated};
///
/// let length: Rule<String, &str, usize> = Rule::from_fn(|s: String| {
///     if s.is_empty() { Validated::error("empty") } else { Validated::ok(s.len()) }
/// });
///
/// assert_eq!(length.validate("Cool".to_string()), Validated::ok(4));
/// assert_eq!(length.validate(String::new()), Validated::error("empty"));
/// ```
pub struct Rule<P, E, A, M = ()> {
    run: Rc<RuleFn<P, E, A, M>>,
}

impl<P, E, A, M> Clone for Rule<P, E, A, M> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<P, E, A, M> fmt::Debug for Rule<P, E, A, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").finish_non_exhaustive()
    }
}

impl<P, E, A, M> Rule<P, E, A, M>
where
    P: 'static,
    E: 'static,
    A: 'static,
    M: 'static,
{
    /// Creates a rule from a function of the input and the meta data.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{Rule, Validated};
    ///
    /// let scaled: Rule<i32, (), i32, (i32,)> = Rule::new(|n, (factor,): &(i32,)| Validated::ok(n * factor));
    /// assert_eq!(scaled.apply(4, &(3,)), Validated::ok(12));
    /// ```
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(P, &M) -> Validated<E, A> + 'static,
    {
        Self { run: Rc::new(f) }
    }

    /// Creates a rule from a function of the input alone; the meta data is
    /// ignored, so the rule fits into compositions with any meta type.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(P) -> Validated<E, A> + 'static,
    {
        Self::new(move |input, _meta| f(input))
    }

    /// Applies the rule to `input` with the given meta data.
    #[inline]
    pub fn apply(&self, input: P, meta: &M) -> Validated<E, A> {
        (self.run)(input, meta)
    }

    /// Transforms the value produced on success.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{Rule, Validated};
    ///
    /// let always_valid: Rule<String, String, String> = Rule::from_fn(Validated::ok);
    /// assert_eq!(always_valid.map(|s| s.len()).validate("Cool".into()), Validated::ok(4));
    /// ```
    pub fn map<B, F>(self, f: F) -> Rule<P, E, B, M>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        Rule::new(move |input, meta| self.apply(input, meta).map(&f))
    }

    /// Transforms the error payload produced on failure.
    pub fn map_err<F, G>(self, f: G) -> Rule<P, F, A, M>
    where
        F: 'static,
        G: Fn(E) -> F + 'static,
    {
        Rule::new(move |input, meta| self.apply(input, meta).map_err(&f))
    }

    /// Chains `next` after this rule.
    ///
    /// `next` receives the value this rule produced, together with the same
    /// meta data, and runs only if this rule succeeded. An upstream failure is
    /// converted into the error type of `next`, so the composed rule reports
    /// failures of either step. Composition is associative.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{Rule, Validated};
    ///
    /// let trimmed: Rule<String, String, String> = Rule::from_fn(|s: String| Validated::ok(s.trim().to_string()));
    /// let number: Rule<String, String, i32> = Rule::from_fn(|s: String| {
    ///     s.parse().map_or_else(|_| Validated::error(format!("{s} is not a number")), Validated::ok)
    /// });
    ///
    /// let parsed = trimmed.compose(number);
    /// assert_eq!(parsed.validate(" 44 ".into()), Validated::ok(44));
    /// assert_eq!(parsed.validate("NaN".into()), Validated::error("NaN is not a number".to_string()));
    /// ```
    #[doc(alias = "compose_with")]
    pub fn compose<F, B>(self, next: Rule<A, F, B, M>) -> Rule<P, F, B, M>
    where
        E: Into<F>,
        F: 'static,
        B: 'static,
    {
        Rule::new(move |input, meta| match self.apply(input, meta) {
            Validated::Valid(value) => next.apply(value, meta),
            Validated::Invalid(error) => {
                trace_event!("compose short-circuited on upstream failure");
                Validated::Invalid(error.into())
            }
        })
    }

    /// Keeps a successful value only if `pred` holds, otherwise fails with
    /// the error built by `to_error`.
    pub fn filter<F, Pr, T>(self, pred: Pr, to_error: T) -> Self
    where
        F: Into<E>,
        Pr: Fn(&A) -> bool + 'static,
        T: Fn(A) -> F + 'static,
    {
        Rule::new(move |input, meta| self.apply(input, meta).filter(&pred, &to_error))
    }

    /// Turns every failure into a fallback value; the resulting rule cannot
    /// fail.
    pub fn recover<F>(self, f: F) -> Rule<P, Infallible, A, M>
    where
        F: Fn(E) -> A + 'static,
    {
        Rule::new(move |input, meta| self.apply(input, meta).recover(&f))
    }

    /// Tries `alternative` on the same input when this rule fails.
    ///
    /// The first rule's error is discarded; if the alternative fails too, its
    /// error is reported.
    pub fn or_else<F>(self, alternative: Rule<P, F, A, M>) -> Rule<P, F, A, M>
    where
        P: Clone,
        F: 'static,
    {
        Rule::new(move |input: P, meta| {
            self.apply(input.clone(), meta)
                .or_else(|_| alternative.apply(input, meta))
        })
    }

    /// Adapts a rule expecting meta `M` into one expecting meta `N`.
    ///
    /// `f` derives the meta this rule needs from the outer meta, so nested
    /// compositions with different meta shapes can be reconciled without
    /// touching their leaf rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{Rule, Validated};
    ///
    /// struct Context { minimum: i32, locale: &'static str }
    ///
    /// let at_least: Rule<i32, String, i32, i32> = Rule::new(|n, min: &i32| {
    ///     if n >= *min { Validated::ok(n) } else { Validated::error(format!("{n} < {min}")) }
    /// });
    /// let in_context: Rule<i32, String, i32, Context> = at_least.lmap_meta(|ctx: &Context| ctx.minimum);
    ///
    /// let ctx = Context { minimum: 3, locale: "en" };
    /// assert_eq!(in_context.apply(2, &ctx), Validated::error("2 < 3".to_string()));
    /// # let _ = ctx.locale;
    /// ```
    pub fn lmap_meta<N, F>(self, f: F) -> Rule<P, E, A, N>
    where
        N: 'static,
        F: Fn(&N) -> M + 'static,
    {
        Rule::new(move |input, meta: &N| self.apply(input, &f(meta)))
    }

    /// Widens the meta type to any `N` that can be borrowed as `M`.
    ///
    /// No meta value is created, dropped or reordered: the rule sees a
    /// borrow of the very meta it is given.
    pub fn upcast_meta<N>(self) -> Rule<P, E, A, N>
    where
        N: Borrow<M> + 'static,
    {
        Rule::new(move |input, meta: &N| self.apply(input, Borrow::<M>::borrow(meta)))
    }
}

impl<P, E, M> Rule<P, E, P, M>
where
    P: 'static,
    E: 'static,
    M: 'static,
{
    /// A rule that accepts every input unchanged.
    #[inline]
    pub fn identity() -> Self {
        Self::from_fn(Validated::Valid)
    }
}

impl<P, E, A> Rule<P, E, A, ()>
where
    P: 'static,
    E: 'static,
    A: 'static,
{
    /// Applies a rule that needs no meta data.
    #[inline]
    pub fn validate(&self, input: P) -> Validated<E, A> {
        self.apply(input, &())
    }
}
