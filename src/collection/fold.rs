//! Curried folds over anything iterable.
//!
//! Both folds take a curried combining function and an initial accumulator,
//! and return a reusable function over any [`IntoIterator`]: sequences, sets,
//! the `(key, value)` pairs of a mapping, the characters of `str::chars()`,
//! lazy sequences.
//!
//! Both traverse the input forward, exactly once. They differ only in the
//! argument order of the combining function:
//!
//! ```text
//! fold_left(f, z)([x1, x2, x3])  == f(f(f(z)(x1))(x2))(x3)
//! fold_right(f, z)([x1, x2, x3]) == f(x3)(f(x2)(f(x1)(z)))
//! ```
//!
//! `fold_right` does not reverse its input first. For an associative and
//! commutative `f` the two folds agree; otherwise they differ from the
//! textbook right fold.

/// Folds an iterable from the first element to the last with a curried
/// function `function(accumulator)(element)`.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::fold_left;
/// use std::collections::HashSet;
///
/// fn add(accumulator: i32) -> impl Fn(i32) -> i32 {
///     move |element| accumulator + element
/// }
///
/// assert_eq!(fold_left(add, 0)(vec![1, 2, 3]), 6);
/// assert_eq!(fold_left(add, 0)(HashSet::from([1, 2, 3])), 6);
/// ```
pub fn fold_left<C, A, F, G>(function: F, initial: A) -> impl Fn(C) -> A
where
    C: IntoIterator,
    F: Fn(A) -> G,
    G: FnOnce(C::Item) -> A,
    A: Clone,
{
    move |collection: C| {
        collection
            .into_iter()
            .fold(initial.clone(), |accumulator, element| {
                function(accumulator)(element)
            })
    }
}

/// Folds an iterable with a curried function `function(element)(accumulator)`.
///
/// The traversal is forward: each element is combined with the accumulator
/// built from the elements before it.
///
/// # Examples
///
/// ```rust
/// use polycomb::collection::fold_right;
///
/// fn prepend(element: char) -> impl FnOnce(String) -> String {
///     move |accumulator| format!("{element}{accumulator}")
/// }
///
/// // Forward traversal: 'a' is combined first, 'c' last.
/// assert_eq!(fold_right(prepend, String::new())("abc".chars()), "cba");
/// ```
pub fn fold_right<C, A, F, G>(function: F, initial: A) -> impl Fn(C) -> A
where
    C: IntoIterator,
    F: Fn(C::Item) -> G,
    G: FnOnce(A) -> A,
    A: Clone,
{
    move |collection: C| {
        collection
            .into_iter()
            .fold(initial.clone(), |accumulator, element| {
                function(element)(accumulator)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::{BTreeMap, BTreeSet};

    fn add(left: i32) -> impl Fn(i32) -> i32 {
        move |right| left + right
    }

    fn push(element: i32) -> impl FnOnce(Vec<i32>) -> Vec<i32> {
        move |mut accumulator| {
            accumulator.push(element);
            accumulator
        }
    }

    fn cons(element: i32) -> impl FnOnce(Vec<i32>) -> Vec<i32> {
        move |accumulator| {
            let mut result = vec![element];
            result.extend(accumulator);
            result
        }
    }

    #[rstest]
    #[case(vec![], 0)]
    #[case(vec![1, 2, 3], 6)]
    #[case(vec![-4, 4], 0)]
    fn fold_left_sums_vec(#[case] values: Vec<i32>, #[case] expected: i32) {
        assert_eq!(fold_left(add, 0)(values), expected);
    }

    #[rstest]
    fn fold_left_sums_set() {
        assert_eq!(fold_left(add, 0)(BTreeSet::from([1, 2, 3])), 6);
    }

    #[rstest]
    fn fold_left_passes_accumulator_first() {
        let collect = |accumulator: String| move |element: char| format!("{accumulator}{element}");
        assert_eq!(fold_left(collect, String::new())("abc".chars()), "abc");
    }

    #[rstest]
    fn fold_left_is_reusable() {
        let sum = fold_left(add, 10);
        assert_eq!(sum(vec![1]), 11);
        assert_eq!(sum(vec![2, 3]), 15);
    }

    #[rstest]
    fn fold_right_sums_vec() {
        assert_eq!(fold_right(add, 0)(vec![1, 2, 3]), 6);
    }

    #[rstest]
    fn fold_right_traverses_forward() {
        assert_eq!(fold_right(push, Vec::new())(vec![1, 2, 3]), vec![1, 2, 3]);
        assert_eq!(fold_right(cons, Vec::new())(vec![1, 2, 3]), vec![3, 2, 1]);
    }

    #[rstest]
    fn fold_over_map_entries() {
        let scores = BTreeMap::from([("Bob", 1), ("Alice", 2), ("Priscilla", 3)]);
        let total = fold_left(
            |accumulator: i32| move |(_, score): (&str, i32)| accumulator + score,
            0,
        )(scores);
        assert_eq!(total, 6);
    }
}
