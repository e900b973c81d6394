//! Sorting iterables with key-extraction comparators.
//!
//! [`sort`] materializes any iterable into a `Vec` and sorts it.
//! [`by`] builds the comparator from a key-extraction function.
//!
//! # Comparator model
//!
//! A comparator is read as a "strictly before" test: `a` is placed before `b`
//! only when `comparator(a, b)` is [`Ordering::Less`]. When neither
//! `comparator(a, b)` nor `comparator(b, a)` is `Less` the two elements are
//! treated as equal and keep their encounter order (the sort is stable).
//!
//! This matters for [`by`], which never answers `Equal`: for two elements
//! with the same key it answers `Greater` in both directions. Fed directly to
//! [`slice::sort_by`] such a comparator is not a total order, and the
//! standard library may panic on it. [`sort`] and [`sort_in_place`] accept it.

use std::cmp::Ordering;

/// Builds a comparator that orders elements by an extracted key.
///
/// The comparator returns [`Ordering::Less`] when `key(a) < key(b)` and
/// [`Ordering::Greater`] otherwise, including when the keys are equal or
/// incomparable. It never returns [`Ordering::Equal`].
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::by;
/// use std::cmp::Ordering;
///
/// let by_length = by(|text: &&str| text.len());
/// assert_eq!(by_length(&"a", &"bb"), Ordering::Less);
/// assert_eq!(by_length(&"bb", &"a"), Ordering::Greater);
/// assert_eq!(by_length(&"aa", &"bb"), Ordering::Greater);
/// ```
pub fn by<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    F: Fn(&T) -> K,
    K: PartialOrd,
{
    move |left: &T, right: &T| {
        if key(left) < key(right) {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

/// Builds a reusable sort over any iterable.
///
/// The input is collected into a `Vec` (a `Vec` input is reused without
/// reallocation) and sorted with `comparator`, following the comparator
/// model described in the [module documentation](self).
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::{by, sort};
/// use std::collections::HashSet;
///
/// assert_eq!(sort(by(|x: &i32| *x))(vec![3, 2, 1]), vec![1, 2, 3]);
/// assert_eq!(sort(by(|x: &i32| *x))(HashSet::from([3, 2, 1])), vec![1, 2, 3]);
/// ```
pub fn sort<C, Cmp>(comparator: Cmp) -> impl Fn(C) -> Vec<C::Item>
where
    C: IntoIterator,
    Cmp: Fn(&C::Item, &C::Item) -> Ordering,
{
    move |collection: C| {
        let mut elements: Vec<C::Item> = collection.into_iter().collect();
        sort_in_place(&mut elements, &comparator);
        elements
    }
}

/// Sorts a slice in place with `comparator`, following the comparator model
/// described in the [module documentation](self).
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::{by, sort_in_place};
///
/// let mut words = ["pear", "fig", "apple"];
/// sort_in_place(&mut words, by(|word: &&str| word.len()));
/// assert_eq!(words, ["fig", "pear", "apple"]);
/// ```
pub fn sort_in_place<T, Cmp>(elements: &mut [T], comparator: Cmp)
where
    Cmp: Fn(&T, &T) -> Ordering,
{
    elements.sort_by(|left, right| {
        if comparator(left, right) == Ordering::Less {
            Ordering::Less
        } else if comparator(right, left) == Ordering::Less {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
}
