//! Field-wise validation of JSON objects.
//!
//! [`Rule::shape`] validates a homogeneous record of fields, [`Rule::fields`]
//! validates a typed tuple of fields whose values differ in type. Both look
//! every declared field up in the object (a missing field reaches its rule
//! as `None`), run all field rules and gather the failing ones into a keyed
//! [`Record`] of errors.
use serde_json::{Map, Value};

use crate::rule::core::Rule;
use crate::types::alloc_type::{Rc, String, Vec};
use crate::types::{Key, Record};
use crate::validated::aggregate::combine_entries;
use crate::validated::Validated;

/// JSON object as produced by [`object`](crate::leaf::object).
pub type Object = Map<String, Value>;

/// Rule for one object field: receives the field's value, or `None` when the
/// object has no such field.
pub type FieldRule<F, B, M = ()> = Rule<Option<Value>, F, B, M>;

impl<P, E, M> Rule<P, E, Object, M>
where
    P: 'static,
    E: 'static,
    M: 'static,
{
    /// Validates the fields of the object this rule produces.
    ///
    /// This is the object rule (the type guard) composed with
    /// [`Rule::combine`] over the declared fields. The keyed field errors
    /// are folded into this rule's error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::leaf::{number, object, NumberRules, Violation};
    /// use rule_rail::record;
    /// use serde_json::json;
    ///
    /// let point = object::<()>().shape(record! {
    ///     "x" => number().positive().required(),
    ///     "y" => number().positive().required(),
    /// });
    ///
    /// let errors = point.validate(json!({ "x": 1, "y": -2 })).into_error().unwrap();
    /// assert!(errors.field("y").is_some());
    /// assert!(errors.field("x").is_none());
    /// ```
    pub fn shape<F, B>(self, fields: Record<FieldRule<F, B, M>>) -> Rule<P, E, Record<B>, M>
    where
        F: 'static,
        B: 'static,
        Record<F>: Into<E>,
    {
        let fields = Rc::new(fields);
        Rule::new(move |input, meta| {
            self.apply(input, meta).and_then(|mut object| {
                let validated: Vec<_> = fields
                    .entries()
                    .map(|(key, rule)| (key.clone(), rule.apply(object.remove(&**key), meta)))
                    .collect();
                combine_entries(validated).map_err(Into::into)
            })
        })
    }

    /// Validates a typed tuple of fields of the object this rule produces.
    ///
    /// Each field keeps its own value type, so the rule yields a tuple of
    /// the field values that can be mapped straight into a struct. Errors
    /// share one type and are gathered by key, exactly as with
    /// [`shape`](Rule::shape).
    ///
    /// # Examples
    ///
    /// ```
    /// use rule_rail::leaf::{number, object, string, NumberRules, Reason, Violation};
    /// use rule_rail::rule::field;
    /// use serde_json::json;
    ///
    /// struct Sample { n: f64, s: String }
    ///
    /// let sample = object::<()>()
    ///     .fields((field("n", number().positive().required()), field("s", string().required())))
    ///     .map(|(n, s)| Sample { n, s });
    ///
    /// let valid = sample.validate(json!({ "n": 1, "s": "ok" })).into_value().unwrap();
    /// assert_eq!((valid.n, valid.s.as_str()), (1.0, "ok"));
    ///
    /// let errors = sample.validate(json!({ "n": -1, "s": true })).into_error().unwrap();
    /// assert_eq!(errors.field("n"), Some(&Violation::from(Reason::NotPositive(-1.0))));
    /// assert_eq!(errors.field("s"), Some(&Violation::from(Reason::NotAString(json!(true)))));
    /// ```
    pub fn fields<S>(self, set: S) -> Rule<P, E, S::Output, M>
    where
        S: FieldSet<M> + 'static,
        S::Output: 'static,
        Record<S::Error>: Into<E>,
    {
        Rule::new(move |input, meta| {
            self.apply(input, meta)
                .and_then(|mut object| set.apply_fields(&mut object, meta).map_err(Into::into))
        })
    }
}

/// A named field rule, one element of a [`FieldSet`] tuple.
#[derive(Debug, Clone)]
pub struct Field<F, B, M = ()> {
    key: Key,
    rule: FieldRule<F, B, M>,
}

impl<F, B, M> Field<F, B, M> {
    /// The field name.
    pub fn key(&self) -> &str {
        &self.key
    }
}

/// Declares a field of a [`FieldSet`].
pub fn field<K, F, B, M>(key: K, rule: FieldRule<F, B, M>) -> Field<F, B, M>
where
    K: Into<Key>,
{
    Field {
        key: key.into(),
        rule,
    }
}

/// A fixed set of typed fields validated together by [`Rule::fields`].
///
/// Implemented for tuples of one to eight [`Field`]s sharing the error type
/// and meta type.
pub trait FieldSet<M> {
    /// Error type shared by every field.
    type Error;
    /// Tuple of the field values, in declaration order.
    type Output;

    /// Validates every field of `object`, removing the fields it reads.
    fn apply_fields(
        &self,
        object: &mut Object,
        meta: &M,
    ) -> Validated<Record<Self::Error>, Self::Output>;
}

macro_rules! impl_field_set {
    ($($name:ident: $value:ident),+) => {
        impl<F, M, $($value),+> FieldSet<M> for ($(Field<F, $value, M>,)+)
        where
            F: 'static,
            M: 'static,
            $($value: 'static,)+
        {
            type Error = F;
            type Output = ($($value,)+);

            fn apply_fields(&self, object: &mut Object, meta: &M) -> Validated<Record<F>, Self::Output> {
                let ($($name,)+) = self;
                let mut errors = Record::new();
                $(
                    let $name = match $name.rule.apply(object.remove($name.key()), meta) {
                        Validated::Valid(value) => Some(value),
                        Validated::Invalid(error) => {
                            errors.insert($name.key.clone(), error);
                            None
                        }
                    };
                )+
                match ($($name,)+) {
                    ($(Some($name),)+) => Validated::Valid(($($name,)+)),
                    _ => Validated::Invalid(errors),
                }
            }
        }
    };
}

impl_field_set!(a: T1);
impl_field_set!(a: T1, b: T2);
impl_field_set!(a: T1, b: T2, c: T3);
impl_field_set!(a: T1, b: T2, c: T3, d: T4);
impl_field_set!(a: T1, b: T2, c: T3, d: T4, e: T5);
impl_field_set!(a: T1, b: T2, c: T3, d: T4, e: T5, f: T6);
impl_field_set!(a: T1, b: T2, c: T3, d: T4, e: T5, f: T6, g: T7);
impl_field_set!(a: T1, b: T2, c: T3, d: T4, e: T5, f: T6, g: T7, h: T8);
