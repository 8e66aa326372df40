//! Accumulating many validations into one.
//!
//! Both helpers walk their input exactly once and never stop early: every
//! failure ends up in the aggregate error, and the aggregate is valid only
//! when nothing failed.
use crate::macros::trace_event;
use crate::types::alloc_type::Vec;
use crate::types::{Holes, Key, Record};
use crate::validated::core::Validated;

/// Positional accumulation over a list of validations.
///
/// Returns every value, in input order, when all validations are valid.
/// Otherwise returns a [`Holes`] collection as long as the input, holding
/// `Some(error)` at each failing index and `None` at each valid one.
///
/// # Examples
///
/// ```
/// use rule_rail::validated::{sequence, Validated};
///
/// let all_valid = sequence(vec![Validated::<&str, i32>::ok(1), Validated::ok(2)]);
/// assert_eq!(all_valid, Validated::ok(vec![1, 2]));
///
/// let some_invalid = sequence(vec![Validated::error("a"), Validated::<&str, i32>::ok(2)]);
/// assert_eq!(some_invalid, Validated::error(vec![Some("a"), None]));
/// ```
pub fn sequence<E, A, I>(validations: I) -> Validated<Holes<E>, Vec<A>>
where
    I: IntoIterator<Item = Validated<E, A>>,
{
    let iter = validations.into_iter();
    let (lower, _) = iter.size_hint();
    let mut values = Vec::with_capacity(lower);
    let mut errors: Holes<E> = Vec::with_capacity(lower);
    let mut failed = 0usize;

    for validated in iter {
        match validated {
            Validated::Valid(value) => {
                values.push(value);
                errors.push(None);
            }
            Validated::Invalid(error) => {
                errors.push(Some(error));
                failed += 1;
            }
        }
    }

    trace_event!(total = errors.len(), failed, "sequence aggregated");
    if failed == 0 {
        Validated::Valid(values)
    } else {
        Validated::Invalid(errors)
    }
}

/// Keyed accumulation over a record of validations.
///
/// Keys are visited in insertion order. The error record contains exactly
/// the keys whose validation failed; valid keys are omitted rather than
/// mapped to a placeholder.
///
/// # Examples
///
/// ```
/// use rule_rail::types::Record;
/// use rule_rail::validated::{combine, Validated};
///
/// let fields: Record<Validated<&str, i32>> = [
///     ("koala", Validated::error("no")),
///     ("tiger", Validated::ok(4)),
/// ]
/// .into_iter()
/// .collect();
///
/// let errors = combine(fields).into_error().unwrap();
/// assert_eq!(errors.keys().collect::<Vec<_>>(), ["koala"]);
/// ```
pub fn combine<E, A>(record: Record<Validated<E, A>>) -> Validated<Record<E>, Record<A>> {
    combine_entries(record)
}

pub(crate) fn combine_entries<E, A, I>(entries: I) -> Validated<Record<E>, Record<A>>
where
    I: IntoIterator<Item = (Key, Validated<E, A>)>,
{
    let mut values = Record::new();
    let mut errors = Record::new();

    for (key, validated) in entries {
        match validated {
            Validated::Valid(value) => {
                values.insert(key, value);
            }
            Validated::Invalid(error) => {
                errors.insert(key, error);
            }
        }
    }

    trace_event!(
        total = values.len() + errors.len(),
        failed = errors.len(),
        "combine aggregated"
    );
    if errors.is_empty() {
        Validated::Valid(values)
    } else {
        Validated::Invalid(errors)
    }
}

impl<E, A> Validated<E, A> {
    /// Positional accumulation; see [`sequence`].
    #[inline]
    pub fn sequence<I>(validations: I) -> Validated<Holes<E>, Vec<A>>
    where
        I: IntoIterator<Item = Validated<E, A>>,
    {
        sequence(validations)
    }

    /// Keyed accumulation; see [`combine`].
    #[inline]
    pub fn combine(record: Record<Validated<E, A>>) -> Validated<Record<E>, Record<A>> {
        combine(record)
    }
}

impl<E, A> FromIterator<Validated<E, A>> for Validated<Holes<E>, Vec<A>> {
    fn from_iter<I: IntoIterator<Item = Validated<E, A>>>(iter: I) -> Self {
        sequence(iter)
    }
}

impl<K, E, A> FromIterator<(K, Validated<E, A>)> for Validated<Record<E>, Record<A>>
where
    K: Into<Key>,
{
    fn from_iter<I: IntoIterator<Item = (K, Validated<E, A>)>>(iter: I) -> Self {
        combine_entries(iter.into_iter().map(|(key, validated)| (key.into(), validated)))
    }
}
