//! Property-based tests for composition laws.
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe Equivalence**: `compose!(f, g, h)(x) == pipe!(x, f, g, h)`
//! - **Sequence Equivalence**: `pipe_all(x, [f, g]) == pipe!(x, f, g)`

#![cfg(feature = "compose")]

use polycomb::compose::{compose_all, identity, over_both, over_left, over_right, pipe_all};
use polycomb::{compose, pipe};
use proptest::prelude::*;

fn add_one(value: i64) -> i64 {
    value.wrapping_add(1)
}

fn double(value: i64) -> i64 {
    value.wrapping_mul(2)
}

fn negate(value: i64) -> i64 {
    value.wrapping_neg()
}

fn subtract(left: i64) -> impl Fn(i64) -> i64 {
    move |right| left.wrapping_sub(right)
}

proptest! {
    #[test]
    fn prop_compose_associativity(value in any::<i64>()) {
        let left = compose!(add_one, compose!(double, negate));
        let right = compose!(compose!(add_one, double), negate);
        prop_assert_eq!(left(value), right(value));
    }

    #[test]
    fn prop_compose_identity(value in any::<i64>()) {
        let left_identity = compose!(identity, double);
        let right_identity = compose!(double, identity);
        prop_assert_eq!(left_identity(value), double(value));
        prop_assert_eq!(right_identity(value), double(value));
    }

    #[test]
    fn prop_compose_equals_pipe(value in any::<i64>()) {
        let composed = compose!(add_one, double, negate);
        prop_assert_eq!(composed(value), pipe!(value, add_one, double, negate));
    }

    #[test]
    fn prop_pipe_all_equals_pipe(value in any::<i64>(), order in prop::collection::vec(0_usize..3, 0..8)) {
        let table: [fn(i64) -> i64; 3] = [add_one, double, negate];
        let steps: Vec<fn(i64) -> i64> = order.iter().map(|index| table[*index]).collect();

        let expected = order.iter().fold(value, |accumulator, index| table[*index](accumulator));
        prop_assert_eq!(pipe_all(value, steps.clone()), expected);
        prop_assert_eq!(compose_all(steps)(value), expected);
    }

    #[test]
    fn prop_over_both_with_identity_is_function(left in any::<i64>(), right in any::<i64>()) {
        let wrapped = over_both(subtract)(identity::<i64>, identity::<i64>);
        prop_assert_eq!(wrapped(left)(right), subtract(left)(right));
    }

    #[test]
    fn prop_over_wrappers_agree_with_over_both(left in any::<i64>(), right in any::<i64>()) {
        let both = over_both(subtract)(negate, double);
        let right_only = over_right(subtract)(double);
        let left_only = over_left(subtract)(negate);

        prop_assert_eq!(both(left)(right), right_only(negate(left))(right));
        prop_assert_eq!(both(left)(right), left_only(left)(double(right)));
    }
}
