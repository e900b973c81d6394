//! Unit tests for the pipe! macro.
//!
//! Tests for left-to-right pipelines, alone and mixed with the curried
//! collection operations.

#![cfg(feature = "compose")]

use polycomb::pipe;

// =============================================================================
// Basic pipe! tests
// =============================================================================

#[test]
fn test_pipe_value_only() {
    assert_eq!(pipe!(42), 42);
    assert_eq!(pipe!(String::from("hello")), "hello");
}

#[test]
fn test_pipe_single_function() {
    fn double(value: i32) -> i32 {
        value * 2
    }
    assert_eq!(pipe!(5, double), 10);
}

#[test]
fn test_pipe_applies_left_to_right() {
    assert_eq!(pipe!(2, |x: i32| x + 1, |x: i32| x * 3), 9);
    assert_eq!(pipe!(2, |x: i32| x * 3, |x: i32| x + 1), 7);
}

#[test]
fn test_pipe_trailing_comma() {
    assert_eq!(pipe!(1, |x: i32| x + 1,), 2);
}

#[test]
fn test_pipe_changes_types() {
    let result = pipe!(
        "  padded  ",
        str::trim,
        str::len,
        |length: usize| length.to_string(),
    );
    assert_eq!(result, "6");
}

#[test]
fn test_pipe_moves_owned_values() {
    let words = vec![String::from("a"), String::from("b")];
    let joined = pipe!(words, |words: Vec<String>| words.join("-"));
    assert_eq!(joined, "a-b");
}

// =============================================================================
// pipe! with collection operations
// =============================================================================

#[cfg(feature = "collection")]
mod with_collections {
    use polycomb::collection::{by, fold_left, map, partition, sort};
    use polycomb::pipe;

    fn add(accumulator: i32) -> impl Fn(i32) -> i32 {
        move |element| accumulator + element
    }

    #[test]
    fn test_pipe_map_then_fold() {
        let total = pipe!(
            vec![1, 2, 3],
            map(|x: i32| x * 10),
            fold_left(add, 0),
        );
        assert_eq!(total, 60);
    }

    #[test]
    fn test_pipe_sort_then_partition() {
        let (small, large) = pipe!(
            vec![5, 1, 4, 2, 3],
            sort(by(|x: &i32| *x)),
            partition(|x: &i32| *x < 3),
        );
        assert_eq!(small, vec![1, 2]);
        assert_eq!(large, vec![3, 4, 5]);
    }
}
