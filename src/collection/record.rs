//! Plain string-keyed records.

use std::collections::BTreeMap;
use std::collections::btree_map;

/// A plain record: a set of fields with unique string keys.
///
/// `Record` models a key-string object rather than a general mapping. It is
/// deliberately not iterable: folds, sorts and partitions reject it at compile
/// time, as they reject numbers. Its fields are reachable through
/// [`entries`](Record::entries) and [`into_entries`](Record::into_entries).
///
/// Field order carries no meaning; iteration is in key order.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::{Record, map};
///
/// let record = Record::from([("Bob", 0), ("Alice", 1)]);
/// let incremented = map(|x: i32| x + 1)(record);
/// assert_eq!(incremented.get("Bob"), Some(&1));
/// assert_eq!(incremented.get("Alice"), Some(&2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Record<T> {
    fields: BTreeMap<String, T>,
}

impl<T> Record<T> {
    /// Creates an empty record.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
        }
    }

    /// Returns the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.fields.get(key)
    }

    /// Returns `true` if the record has a field named `key`.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Sets the field `key` to `value`, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: T) -> Option<T> {
        self.fields.insert(key.into(), value)
    }

    /// Removes the field `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        self.fields.remove(key)
    }

    /// Returns the number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the field names.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs by reference.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &T)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Consumes the record, yielding its `(key, value)` pairs.
    pub fn into_entries(self) -> btree_map::IntoIter<String, T> {
        self.fields.into_iter()
    }
}

impl<K, T> FromIterator<(K, T)> for Record<T>
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, T)>>(entries: I) -> Self {
        Self {
            fields: entries
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

impl<K, T, const N: usize> From<[(K, T); N]> for Record<T>
where
    K: Into<String>,
{
    fn from(entries: [(K, T); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<T> From<BTreeMap<String, T>> for Record<T> {
    fn from(fields: BTreeMap<String, T>) -> Self {
        Self { fields }
    }
}

impl<T> From<Record<T>> for BTreeMap<String, T> {
    fn from(record: Record<T>) -> Self {
        record.fields
    }
}
