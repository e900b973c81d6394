//! Lazy, single-pass sequences.
//!
//! [`LazySeq`] marks an iterator as a lazy sequence shape. Mapping or binding
//! a `LazySeq` wraps the underlying iterator in an adapter: nothing is
//! computed until elements are pulled, and abandoning the sequence part-way
//! needs no cleanup.

use std::iter::{FlatMap, FromFn, Map};

use super::bindable::Bindable;
use super::mappable::Mappable;

/// A lazy sequence over an iterator.
///
/// `LazySeq` is itself an [`Iterator`], so it can be consumed by
/// [`fold_left`](super::fold_left), [`sort`](super::sort),
/// [`partition`](super::partition) or a `for` loop. It may be infinite.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::{LazySeq, map};
///
/// let naturals = LazySeq::new(1..);
/// let squares = map(|x: u64| x * x)(naturals);
/// let first: Vec<u64> = squares.take(4).collect();
/// assert_eq!(first, vec![1, 4, 9, 16]);
/// ```
#[derive(Debug, Clone)]
pub struct LazySeq<I> {
    iterator: I,
}

impl<I: Iterator> LazySeq<I> {
    /// Wraps anything iterable as a lazy sequence.
    ///
    /// Wrapping a key-value mapping yields its `(key, value)` pairs.
    #[inline]
    pub fn new<C>(source: C) -> Self
    where
        C: IntoIterator<IntoIter = I>,
    {
        Self {
            iterator: source.into_iter(),
        }
    }

    /// Unwraps the underlying iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.iterator
    }
}

impl<G> LazySeq<FromFn<G>> {
    /// Creates a lazy sequence from a generator function, which is called
    /// each time an element is pulled until it returns `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use polycomb::collection::LazySeq;
    ///
    /// let mut state = 1;
    /// let powers = LazySeq::from_fn(move || {
    ///     state *= 2;
    ///     Some(state)
    /// });
    /// assert_eq!(powers.take(3).collect::<Vec<_>>(), vec![2, 4, 8]);
    /// ```
    #[inline]
    pub fn from_fn<T>(generator: G) -> Self
    where
        G: FnMut() -> Option<T>,
    {
        Self {
            iterator: std::iter::from_fn(generator),
        }
    }
}

impl<I: Iterator> Iterator for LazySeq<I> {
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iterator.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iterator.size_hint()
    }
}

impl<I, B, F> Mappable<F> for LazySeq<I>
where
    I: Iterator,
    F: FnMut(I::Item) -> B,
{
    type Output = LazySeq<Map<I, F>>;

    #[inline]
    fn map_each(self, function: F) -> Self::Output {
        LazySeq {
            iterator: self.iterator.map(function),
        }
    }
}

impl<I, R, F> Bindable<F> for LazySeq<I>
where
    I: Iterator,
    F: FnMut(I::Item) -> R,
    R: IntoIterator,
{
    type Output = LazySeq<FlatMap<I, R, F>>;

    #[inline]
    fn bind_each(self, function: F) -> Self::Output {
        LazySeq {
            iterator: self.iterator.flat_map(function),
        }
    }
}
