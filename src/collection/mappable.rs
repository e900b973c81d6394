//! Shape-preserving element-wise mapping.
//!
//! This module provides the [`Mappable`] trait and the curried [`map`]
//! function. Mapping applies a function to every element of a container and
//! returns a container of the same shape:
//!
//! | Input                 | Output                |
//! |-----------------------|-----------------------|
//! | `Vec<A>`              | `Vec<B>`              |
//! | `HashSet<A, S>`       | `HashSet<B, S>`       |
//! | `BTreeSet<A>`         | `BTreeSet<B>`         |
//! | `HashMap<K, A, S>`    | `HashMap<K, B, S>`    |
//! | `BTreeMap<K, A>`      | `BTreeMap<K, B>`      |
//! | `Record<A>`           | `Record<B>`           |
//! | `LazySeq<I>`          | `LazySeq<Map<I, F>>`  |
//! | `Deferred<A, E>`      | `Deferred<B, E>`      |
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.map_each(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.map_each(f).map_each(g) == fa.map_each(|x| g(f(x)))
//! ```
//!
//! Sets satisfy both laws up to deduplication: when two distinct elements map
//! to the same value, the result holds it once.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};

use super::record::Record;

/// A container whose elements can be transformed by a function of type `F`
/// while keeping the container's shape.
///
/// The trait is parameterized by the function type so that each shape can
/// state its own requirements: sets need hashable or ordered outputs, lazy
/// sequences keep the function inside their adapter, deferred values need a
/// `Send + 'static` continuation.
///
/// Because the function bound lives on the implementations, closures passed
/// to [`map_each`](Mappable::map_each) or [`map`] need annotated parameter
/// types.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::Mappable;
/// use std::collections::BTreeMap;
///
/// let prices = BTreeMap::from([("apple", 3), ("pear", 5)]);
/// let doubled = prices.map_each(|price: i32| price * 2);
/// assert_eq!(doubled, BTreeMap::from([("apple", 6), ("pear", 10)]));
/// ```
pub trait Mappable<F>: Sized {
    /// The container produced by the mapping.
    type Output;

    /// Applies `function` to each element, producing a container of the same
    /// shape.
    fn map_each(self, function: F) -> Self::Output;
}

/// Builds a reusable mapping over any [`Mappable`] container.
///
/// `map(f)(xs)` is `xs.map_each(f)`. The returned closure can be applied to
/// several containers of the same type; `function` is cloned for each call.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::map;
/// use std::collections::HashSet;
///
/// let increment = map(|x: i32| x + 1);
/// assert_eq!(increment(vec![1, 2, 3]), vec![2, 3, 4]);
/// assert_eq!(increment(vec![10]), vec![11]);
///
/// let halves = map(|x: i32| x / 2)(HashSet::from([2, 3]));
/// assert_eq!(halves, HashSet::from([1]));
/// ```
pub fn map<C, F>(function: F) -> impl Fn(C) -> C::Output
where
    C: Mappable<F>,
    F: Clone,
{
    move |collection: C| collection.map_each(function.clone())
}

// =============================================================================
// Ordered sequences
// =============================================================================

impl<A, B, F> Mappable<F> for Vec<A>
where
    F: FnMut(A) -> B,
{
    type Output = Vec<B>;

    #[inline]
    fn map_each(self, function: F) -> Vec<B> {
        self.into_iter().map(function).collect()
    }
}

// =============================================================================
// Unique-value sets
// =============================================================================

impl<A, B, F, S> Mappable<F> for HashSet<A, S>
where
    F: FnMut(A) -> B,
    B: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = HashSet<B, S>;

    fn map_each(self, function: F) -> HashSet<B, S> {
        self.into_iter().map(function).collect()
    }
}

impl<A, B, F> Mappable<F> for BTreeSet<A>
where
    F: FnMut(A) -> B,
    B: Ord,
{
    type Output = BTreeSet<B>;

    fn map_each(self, function: F) -> BTreeSet<B> {
        self.into_iter().map(function).collect()
    }
}

// =============================================================================
// Key-value mappings
// =============================================================================

impl<K, A, B, F, S> Mappable<F> for HashMap<K, A, S>
where
    K: Eq + Hash,
    F: FnMut(A) -> B,
    S: BuildHasher + Default,
{
    type Output = HashMap<K, B, S>;

    fn map_each(self, mut function: F) -> HashMap<K, B, S> {
        self.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

impl<K, A, B, F> Mappable<F> for BTreeMap<K, A>
where
    K: Ord,
    F: FnMut(A) -> B,
{
    type Output = BTreeMap<K, B>;

    fn map_each(self, mut function: F) -> BTreeMap<K, B> {
        self.into_iter()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}

// =============================================================================
// Plain records
// =============================================================================

impl<A, B, F> Mappable<F> for Record<A>
where
    F: FnMut(A) -> B,
{
    type Output = Record<B>;

    fn map_each(self, mut function: F) -> Record<B> {
        self.into_entries()
            .map(|(key, value)| (key, function(value)))
            .collect()
    }
}
