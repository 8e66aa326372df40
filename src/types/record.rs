use core::fmt;
use core::ops::Index;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::alloc_type::Cow;

/// Key type of a [`Record`].
///
/// Static field names stay borrowed, keys built at run time are owned.
pub type Key = Cow<'static, str>;

/// Insertion-ordered keyed collection.
///
/// `Record` is the keyed counterpart of `Vec`: rule records, the values
/// produced by record aggregation and the keyed error records all use it.
/// Iteration always follows insertion order, so aggregating a record is
/// deterministic, while equality ignores order the way a map's does.
///
/// Lookups are hashed; removal shifts later entries down to keep the order.
///
/// # Examples
///
/// ```
/// use rule_rail::types::Record;
///
/// let mut record = Record::new();
/// record.insert("tiger", 4);
/// record.insert("koala", 8);
/// record.insert("tiger", 5);
///
/// assert_eq!(record.keys().collect::<Vec<_>>(), ["tiger", "koala"]);
/// assert_eq!(record["tiger"], 5);
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Record<V> {
    entries: IndexMap<Key, V, DefaultHashBuilder>,
}

impl<V> Record<V> {
    /// Creates an empty record.
    #[inline]
    pub fn new() -> Self {
        Self {
            entries: IndexMap::default(),
        }
    }

    /// Creates an empty record with room for `capacity` entries.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, DefaultHashBuilder::default()),
        }
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the record holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts `value` under `key`.
    ///
    /// Replacing an existing key keeps its original position and returns the
    /// previous value.
    #[inline]
    pub fn insert<K>(&mut self, key: K, value: V) -> Option<V>
    where
        K: Into<Key>,
    {
        self.entries.insert(key.into(), value)
    }

    /// Returns the value stored under `key`, if any.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`, if any.
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key`, keeping the relative order of the remaining entries.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries.shift_remove(key)
    }

    /// Enumerates the keys in insertion order.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(|key| &**key)
    }

    /// Enumerates the values in insertion order.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &V> + '_ {
        self.entries.values()
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Transforms every value, keeping keys and order.
    pub fn map_values<W, F>(self, mut f: F) -> Record<W>
    where
        F: FnMut(V) -> W,
    {
        Record {
            entries: self
                .entries
                .into_iter()
                .map(|(key, value)| (key, f(value)))
                .collect(),
        }
    }

    /// Returns `true` if both records hold exactly the same key set.
    pub fn same_keys<W>(&self, other: &Record<W>) -> bool {
        self.len() == other.len() && self.keys().all(|key| other.contains_key(key))
    }

    /// Removes `key` in constant time, moving the last entry into its place.
    pub(crate) fn take(&mut self, key: &str) -> Option<V> {
        self.entries.swap_remove(key)
    }

    pub(crate) fn entries(&self) -> impl ExactSizeIterator<Item = (&Key, &V)> + '_ {
        self.entries.iter()
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Record<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Index<&str> for Record<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no entry found for key `{key}`"),
        }
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        record.extend(iter);
        record
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for Record<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(key, value)| (key.into(), value)));
    }
}

impl<V> IntoIterator for Record<V> {
    type Item = (Key, V);
    type IntoIter = indexmap::map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Record<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over the entries of a [`Record`].
pub struct Iter<'a, V> {
    inner: indexmap::map::Iter<'a, Key, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, value)| (&**key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}
