//! Single-slot memoization of functions of an input and meta data.
//!
//! A [`Memoized`] function remembers its most recent call. When it is called
//! again with an input and meta value equal to the remembered ones, it
//! returns the remembered result without running the function. Any other
//! call runs the function and replaces the slot.
//!
//! Equality is configurable per part through [`MemoizeConfig`] and defaults
//! to `PartialEq`.
//!
//! # Threading
//!
//! The cache slot lives in a `RefCell`: memoized functions, and rules built
//! with [`Rule::memoize`], are neither `Send` nor `Sync`. Use [`Memoized::fork`]
//! to get an independent cache over the same function.
//!
//! # Examples
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use rule_rail::memoize::Memoized;
//!
//! let calls = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&calls);
//! let square = Memoized::new(move |n: i32, _: &()| {
//!     counter.set(counter.get() + 1);
//!     n * n
//! });
//!
//! assert_eq!(square.call(3, &()), 9);
//! assert_eq!(square.call(3, &()), 9);
//! assert_eq!(calls.get(), 1);
//!
//! assert_eq!(square.call(4, &()), 16);
//! assert_eq!(calls.get(), 2);
//! ```
use core::cell::RefCell;
use core::fmt;

use crate::macros::trace_event;
use crate::rule::Rule;
use crate::types::alloc_type::Rc;
use crate::validated::Validated;

/// Equality used to compare a new call with the remembered one.
pub type Equality<T> = Rc<dyn Fn(&T, &T) -> bool>;

/// Equalities used by a [`Memoized`] function.
pub struct MemoizeConfig<P, M> {
    input_eq: Equality<P>,
    meta_eq: Equality<M>,
}

impl<P, M> MemoizeConfig<P, M> {
    /// Creates a configuration from explicit equalities for the input and
    /// for the whole meta value.
    pub fn new<I, N>(input_eq: I, meta_eq: N) -> Self
    where
        I: Fn(&P, &P) -> bool + 'static,
        N: Fn(&M, &M) -> bool + 'static,
    {
        Self {
            input_eq: Rc::new(input_eq),
            meta_eq: Rc::new(meta_eq),
        }
    }

    /// Replaces the input equality.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::memoize::{MemoizeConfig, Memoized};
    ///
    /// // Case-insensitive cache: "ADA" reuses the result computed for "ada".
    /// let config = MemoizeConfig::<String, ()>::default()
    ///     .with_input_eq(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
    /// let length = Memoized::with_config(|s: String, _: &()| s.len(), config);
    ///
    /// assert_eq!(length.call("ada".into(), &()), 3);
    /// assert!(length.is_cached(&"ADA".into(), &()));
    /// ```
    #[must_use]
    pub fn with_input_eq<I>(mut self, input_eq: I) -> Self
    where
        I: Fn(&P, &P) -> bool + 'static,
    {
        self.input_eq = Rc::new(input_eq);
        self
    }

    /// Replaces the meta equality.
    ///
    /// The equality sees the whole meta value. When the meta is a tuple,
    /// compare each position with its own check and fall back to `==` for
    /// the others.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::memoize::{MemoizeConfig, Memoized};
    ///
    /// // (locale, request id): the request id never affects the result.
    /// type Meta = (String, u64);
    ///
    /// let config = MemoizeConfig::<i32, Meta>::default()
    ///     .with_meta_eq(|(locale_a, _): &Meta, (locale_b, _): &Meta| locale_a == locale_b);
    /// let label =
    ///     Memoized::with_config(|n: i32, (locale, _): &Meta| format!("{locale}:{n}"), config);
    ///
    /// assert_eq!(label.call(7, &("en".into(), 1)), "en:7");
    /// assert!(label.is_cached(&7, &("en".into(), 2)));
    /// assert!(!label.is_cached(&7, &("fr".into(), 1)));
    /// ```
    #[must_use]
    pub fn with_meta_eq<N>(mut self, meta_eq: N) -> Self
    where
        N: Fn(&M, &M) -> bool + 'static,
    {
        self.meta_eq = Rc::new(meta_eq);
        self
    }
}

impl<P: PartialEq + 'static, M: PartialEq + 'static> Default for MemoizeConfig<P, M> {
    fn default() -> Self {
        Self::new(|a: &P, b: &P| a == b, |a: &M, b: &M| a == b)
    }
}

impl<P, M> Clone for MemoizeConfig<P, M> {
    fn clone(&self) -> Self {
        Self {
            input_eq: Rc::clone(&self.input_eq),
            meta_eq: Rc::clone(&self.meta_eq),
        }
    }
}

impl<P, M> fmt::Debug for MemoizeConfig<P, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoizeConfig").finish_non_exhaustive()
    }
}

struct LastCall<P, M, R> {
    input: P,
    meta: M,
    result: R,
}

/// A function of an input and meta data that remembers its last call.
pub struct Memoized<P, M, R> {
    run: Rc<dyn Fn(P, &M) -> R>,
    config: MemoizeConfig<P, M>,
    last: RefCell<Option<LastCall<P, M, R>>>,
}

impl<P, M, R> Memoized<P, M, R>
where
    P: Clone + 'static,
    M: Clone + 'static,
    R: Clone + 'static,
{
    /// Memoizes `run`, comparing calls with `PartialEq`.
    pub fn new<F>(run: F) -> Self
    where
        P: PartialEq,
        M: PartialEq,
        F: Fn(P, &M) -> R + 'static,
    {
        Self::with_config(run, MemoizeConfig::default())
    }

    /// Memoizes `run`, comparing calls with the equalities of `config`.
    pub fn with_config<F>(run: F, config: MemoizeConfig<P, M>) -> Self
    where
        F: Fn(P, &M) -> R + 'static,
    {
        Self {
            run: Rc::new(run),
            config,
            last: RefCell::new(None),
        }
    }

    /// Calls the function, or returns the remembered result if `input` and
    /// `meta` equal those of the previous call.
    pub fn call(&self, input: P, meta: &M) -> R {
        if let Some(result) = self.cached(&input, meta) {
            trace_event!("memoized call hit");
            return result;
        }

        trace_event!("memoized call miss");
        let result = (self.run)(input.clone(), meta);
        *self.last.borrow_mut() = Some(LastCall {
            input,
            meta: meta.clone(),
            result: result.clone(),
        });
        result
    }

    /// Returns `true` if a call with `input` and `meta` would be served from
    /// the cache.
    pub fn is_cached(&self, input: &P, meta: &M) -> bool {
        self.last
            .borrow()
            .as_ref()
            .is_some_and(|last| self.matches(last, input, meta))
    }

    /// Forgets the remembered call.
    pub fn clear(&self) {
        self.last.borrow_mut().take();
    }

    /// Returns a memoized function over the same function and equalities,
    /// with an empty cache of its own.
    #[must_use]
    pub fn fork(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
            config: self.config.clone(),
            last: RefCell::new(None),
        }
    }

    fn cached(&self, input: &P, meta: &M) -> Option<R> {
        self.last
            .borrow()
            .as_ref()
            .filter(|last| self.matches(last, input, meta))
            .map(|last| last.result.clone())
    }

    fn matches(&self, last: &LastCall<P, M, R>, input: &P, meta: &M) -> bool {
        (self.config.input_eq)(&last.input, input) && (self.config.meta_eq)(&last.meta, meta)
    }
}

impl<P, M, R> fmt::Debug for Memoized<P, M, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memoized")
            .field("cached", &self.last.borrow().is_some())
            .finish_non_exhaustive()
    }
}

impl<P, E, A, M> Rule<P, E, A, M>
where
    P: Clone + 'static,
    E: Clone + 'static,
    A: Clone + 'static,
    M: Clone + 'static,
{
    /// Remembers the last validation of this rule, comparing inputs and meta
    /// values with `PartialEq`.
    ///
    /// The returned rule shares one cache slot across its clones.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use rule_rail::{Rule, Validated};
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let expensive: Rule<i32, (), i32> = Rule::from_fn(move |n| {
    ///     counter.set(counter.get() + 1);
    ///     Validated::ok(n)
    /// });
    ///
    /// let cached = expensive.memoize();
    /// assert_eq!(cached.validate(1), Validated::ok(1));
    /// assert_eq!(cached.validate(1), Validated::ok(1));
    /// assert_eq!(cached.validate(2), Validated::ok(2));
    /// assert_eq!(calls.get(), 2);
    /// ```
    pub fn memoize(self) -> Self
    where
        P: PartialEq,
        M: PartialEq,
    {
        self.memoize_with(MemoizeConfig::default())
    }

    /// Remembers the last validation of this rule, comparing inputs and meta
    /// values with the equalities of `config`.
    pub fn memoize_with(self, config: MemoizeConfig<P, M>) -> Self {
        let memoized: Memoized<P, M, Validated<E, A>> =
            Memoized::with_config(move |input, meta| self.apply(input, meta), config);
        Rule::new(move |input, meta| memoized.call(input, meta))
    }
}
