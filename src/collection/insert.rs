//! In-place insertion into containers.
//!
//! Unlike the other collection operations, insertion mutates its target. The
//! target is borrowed exclusively for the duration of the call and handed
//! back, so insertions can be chained.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::record::Record;

/// A container that accepts elements of type `X` in place.
///
/// Sequences and sets take bare values. Mappings and records take
/// `(key, value)` pairs; an existing key is overwritten.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::Insertable;
/// use std::collections::BTreeMap;
///
/// let mut scores = BTreeMap::new();
/// scores.insert_element(("Alice", 3));
/// scores.insert_element(("Alice", 4));
/// assert_eq!(scores, BTreeMap::from([("Alice", 4)]));
/// ```
pub trait Insertable<X> {
    /// Adds `element` to the container.
    fn insert_element(&mut self, element: X);
}

/// Inserts `element` into `container` and returns the container.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::insert;
/// use std::collections::HashSet;
///
/// let mut values = vec![1, 2];
/// insert(insert(&mut values, 3), 4);
/// assert_eq!(values, vec![1, 2, 3, 4]);
///
/// let mut seen = HashSet::from([1]);
/// assert_eq!(insert(&mut seen, 1).len(), 1);
/// ```
pub fn insert<C, X>(container: &mut C, element: X) -> &mut C
where
    C: Insertable<X> + ?Sized,
{
    container.insert_element(element);
    container
}

impl<T> Insertable<T> for Vec<T> {
    #[inline]
    fn insert_element(&mut self, element: T) {
        self.push(element);
    }
}

impl<T, S> Insertable<T> for HashSet<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn insert_element(&mut self, element: T) {
        self.insert(element);
    }
}

impl<T: Ord> Insertable<T> for BTreeSet<T> {
    #[inline]
    fn insert_element(&mut self, element: T) {
        self.insert(element);
    }
}

impl<K, V, S> Insertable<(K, V)> for HashMap<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn insert_element(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Insertable<(K, V)> for BTreeMap<K, V> {
    #[inline]
    fn insert_element(&mut self, (key, value): (K, V)) {
        self.insert(key, value);
    }
}

impl<K, T> Insertable<(K, T)> for Record<T>
where
    K: Into<String>,
{
    #[inline]
    fn insert_element(&mut self, (key, value): (K, T)) {
        self.set(key, value);
    }
}
