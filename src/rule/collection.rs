//! Array and record traversal.
//!
//! Both traversals apply a child rule to every part of the input with the
//! same meta data and never stop at the first failure: the aggregate error
//! mirrors the shape of the input (positional for arrays, keyed for
//! records).
use crate::rule::core::Rule;
use crate::types::alloc_type::{Rc, Vec};
use crate::types::{Holes, Record};
use crate::validated::aggregate::combine_entries;
use crate::validated::{sequence, Validated};

impl<P, E, A, M> Rule<P, E, A, M>
where
    P: 'static,
    E: 'static,
    A: 'static,
    M: 'static,
{
    /// Lifts a rule for one element into a rule for a list of elements.
    ///
    /// Every element is validated. The result is valid only if all elements
    /// are; otherwise the error is a [`Holes`] collection as long as the
    /// input with an error at each failing index.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{Rule, Validated};
    ///
    /// let positive: Rule<i32, &str, i32> =
    ///     Rule::from_fn(|n| if n > 0 { Validated::ok(n) } else { Validated::error("NOT_POSITIVE") });
    /// let all = positive.many();
    ///
    /// assert_eq!(all.validate(vec![1, 2, 3]), Validated::ok(vec![1, 2, 3]));
    /// assert_eq!(
    ///     all.validate(vec![-1, 2, -3]),
    ///     Validated::error(vec![Some("NOT_POSITIVE"), None, Some("NOT_POSITIVE")])
    /// );
    /// ```
    pub fn many(self) -> Rule<Vec<P>, Holes<E>, Vec<A>, M> {
        Rule::new(move |inputs: Vec<P>, meta| {
            sequence(inputs.into_iter().map(|input| self.apply(input, meta)))
        })
    }
}

impl<P, E, Q, M> Rule<P, E, Vec<Q>, M>
where
    P: 'static,
    E: 'static,
    Q: 'static,
    M: 'static,
{
    /// Validates every element of the list this rule produces.
    ///
    /// Equivalent to composing with `element.many()`, except that the
    /// positional element errors are folded into this rule's error type.
    pub fn of<F, B>(self, element: Rule<Q, F, B, M>) -> Rule<P, E, Vec<B>, M>
    where
        F: 'static,
        B: 'static,
        Holes<F>: Into<E>,
    {
        let elements = element.many();
        Rule::new(move |input, meta| {
            self.apply(input, meta)
                .and_then(|items| elements.apply(items, meta).map_err(Into::into))
        })
    }
}

impl<P, E, A, M> Rule<Record<P>, Record<E>, Record<A>, M>
where
    P: 'static,
    E: 'static,
    A: 'static,
    M: 'static,
{
    /// Builds a rule over records from a record of field rules.
    ///
    /// Each field rule is applied to the input field of the same name, all
    /// with the same meta data. Fields are visited in the rule record's
    /// insertion order and the error record holds exactly the failing keys.
    ///
    /// # Panics
    ///
    /// Panics if the input record's key set differs from the rule record's.
    /// A mismatch is a programming error, not a validation failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::{record, Rule, Validated};
    ///
    /// let fields = Rule::combine(record! {
    ///     "koala" => Rule::<i32, i32, i32>::from_fn(Validated::error),
    ///     "tiger" => Rule::from_fn(Validated::ok),
    ///     "duck" => Rule::from_fn(Validated::error),
    /// });
    ///
    /// let errors = fields
    ///     .validate(record! { "koala" => 1, "tiger" => 4, "duck" => 11 })
    ///     .into_error()
    ///     .unwrap();
    /// assert_eq!(errors, record! { "koala" => 1, "duck" => 11 });
    /// ```
    pub fn combine(rules: Record<Rule<P, E, A, M>>) -> Self {
        let rules = Rc::new(rules);
        Rule::new(move |mut input: Record<P>, meta| {
            if let Some(key) = rules.keys().find(|key| !input.contains_key(key)) {
                panic!("input record has no field `{key}` for the rule of the same name");
            }
            if let Some(key) = input.keys().find(|key| !rules.contains_key(key)) {
                panic!("input record has field `{key}` with no matching rule");
            }

            let validated: Vec<_> = rules
                .entries()
                .filter_map(|(key, rule)| {
                    input
                        .take(key)
                        .map(|field| (key.clone(), rule.apply(field, meta)))
                })
                .collect();
            combine_entries(validated)
        })
    }
}

/// Function form of [`Rule::many`].
pub fn many<P, E, A, M>(rule: Rule<P, E, A, M>) -> Rule<Vec<P>, Holes<E>, Vec<A>, M>
where
    P: 'static,
    E: 'static,
    A: 'static,
    M: 'static,
{
    rule.many()
}

/// Function form of [`Rule::combine`].
pub fn combine<P, E, A, M>(
    rules: Record<Rule<P, E, A, M>>,
) -> Rule<Record<P>, Record<E>, Record<A>, M>
where
    P: 'static,
    E: 'static,
    A: 'static,
    M: 'static,
{
    Rule::combine(rules)
}

/// Runs `rule` on every input and aggregates positionally, without building
/// an intermediate list rule.
pub fn traverse<P, E, A, M, I>(
    rule: &Rule<P, E, A, M>,
    inputs: I,
    meta: &M,
) -> Validated<Holes<E>, Vec<A>>
where
    P: 'static,
    E: 'static,
    A: 'static,
    M: 'static,
    I: IntoIterator<Item = P>,
{
    sequence(inputs.into_iter().map(|input| rule.apply(input, meta)))
}
