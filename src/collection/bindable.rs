//! Monadic bind (flat-map) over containers.
//!
//! This module provides the [`Bindable`] trait and the curried [`bind`]
//! function. Binding applies a function that itself produces a collection,
//! then flattens exactly one level into the outer shape:
//!
//! - `Vec<A>` concatenates the produced collections in order.
//! - Sets take the deduplicated union of the produced collections.
//! - `LazySeq<I>` yields the produced elements on demand.
//! - `Deferred<A, E>` chains onto the deferred value returned by the function.
//!
//! Key-value mappings and records are not bindable. A mapping can be bound
//! through its entries by wrapping it in a [`LazySeq`](super::LazySeq).

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// A container that can be flat-mapped with a function of type `F`.
///
/// # Laws
///
/// For sequences, binding with a singleton-producing function is mapping:
///
/// ```text
/// xs.bind_each(|x| vec![f(x)]) == xs.map_each(f)
/// ```
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::Bindable;
///
/// let repeated = vec![1, 2].bind_each(|x: i32| vec![x; 2]);
/// assert_eq!(repeated, vec![1, 1, 2, 2]);
/// ```
pub trait Bindable<F>: Sized {
    /// The flattened container produced by binding.
    type Output;

    /// Applies `function` to each element and flattens the produced
    /// collections one level into the outer shape.
    fn bind_each(self, function: F) -> Self::Output;
}

/// Builds a reusable bind over any [`Bindable`] container.
///
/// `bind(f)(xs)` is `xs.bind_each(f)`.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::bind;
/// use std::collections::HashSet;
///
/// let triple = bind(|x: i32| [x, x, x]);
/// assert_eq!(triple(vec![1]), vec![1, 1, 1]);
///
/// let neighbours = bind(|x: i32| [x, x + 1, x])(HashSet::from([1]));
/// assert_eq!(neighbours, HashSet::from([1, 2]));
/// ```
pub fn bind<C, F>(function: F) -> impl Fn(C) -> C::Output
where
    C: Bindable<F>,
    F: Clone,
{
    move |collection: C| collection.bind_each(function.clone())
}

impl<A, R, F> Bindable<F> for Vec<A>
where
    F: FnMut(A) -> R,
    R: IntoIterator,
{
    type Output = Vec<R::Item>;

    #[inline]
    fn bind_each(self, function: F) -> Vec<R::Item> {
        self.into_iter().flat_map(function).collect()
    }
}

impl<A, R, F, S> Bindable<F> for HashSet<A, S>
where
    F: FnMut(A) -> R,
    R: IntoIterator,
    R::Item: Eq + Hash,
    S: BuildHasher + Default,
{
    type Output = HashSet<R::Item, S>;

    fn bind_each(self, function: F) -> HashSet<R::Item, S> {
        self.into_iter().flat_map(function).collect()
    }
}

impl<A, R, F> Bindable<F> for BTreeSet<A>
where
    F: FnMut(A) -> R,
    R: IntoIterator,
    R::Item: Ord,
{
    type Output = BTreeSet<R::Item>;

    fn bind_each(self, function: F) -> BTreeSet<R::Item> {
        self.into_iter().flat_map(function).collect()
    }
}
