//! Integration tests for the collection operations.
//!
//! Each operation is exercised over every shape it accepts: sequences, sets,
//! mappings, records and lazy sequences.

#![cfg(all(feature = "compose", feature = "collection"))]

use polycomb::collection::{
    LazySeq, Record, bind, by, fold_left, fold_right, insert, map, partition, sort,
};
use polycomb::compose::{over_left, over_right};
use rstest::rstest;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

fn add(left: i32) -> impl Fn(i32) -> i32 + Clone {
    move |right| left + right
}

fn second(entry: (&'static str, i32)) -> i32 {
    entry.1
}

fn parse_digit(character: char) -> i32 {
    character
        .to_digit(10)
        .and_then(|digit| i32::try_from(digit).ok())
        .unwrap_or_default()
}

fn one_two_three() -> LazySeq<impl Iterator<Item = i32>> {
    let mut state = 0;
    LazySeq::from_fn(move || {
        state += 1;
        (state <= 3).then_some(state)
    })
}

fn people() -> BTreeMap<&'static str, i32> {
    BTreeMap::from([("Bob", 1), ("Alice", 2), ("Priscilla", 3)])
}

// =============================================================================
// sort tests
// =============================================================================

#[test]
fn test_sort_sequence() {
    assert_eq!(sort(by(|x: &i32| *x))(vec![3, 2, 1]), vec![1, 2, 3]);
}

#[test]
fn test_sort_sequence_of_structs() {
    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        value: i32,
    }

    let entries = vec![Entry { value: 3 }, Entry { value: 2 }, Entry { value: 1 }];
    let sorted = sort(by(|entry: &Entry| entry.value))(entries);
    let values: Vec<i32> = sorted.iter().map(|entry| entry.value).collect();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn test_sort_set_into_sequence() {
    assert_eq!(sort(by(|x: &i32| *x))(HashSet::from([3, 2, 1])), vec![1, 2, 3]);
}

#[test]
fn test_sort_descending_by_negated_key() {
    assert_eq!(sort(by(|x: &i32| -x))(vec![1, 3, 2]), vec![3, 2, 1]);
}

#[test]
fn test_sort_is_stable_for_equal_keys() {
    let words = vec!["bb", "a", "cc", "d"];
    let sorted = sort(by(|word: &&str| word.len()))(words);
    assert_eq!(sorted, vec!["a", "d", "bb", "cc"]);
}

#[test]
fn test_sort_map_entries_by_value() {
    let sorted = sort(by(|entry: &(&str, i32)| -entry.1))(people());
    assert_eq!(sorted, vec![("Priscilla", 3), ("Alice", 2), ("Bob", 1)]);
}

// =============================================================================
// map tests
// =============================================================================

#[test]
fn test_map_sequence() {
    assert_eq!(map(add(1))(vec![1, 2, 3]), vec![2, 3, 4]);
}

#[test]
fn test_map_record() {
    let result = map(add(1))(Record::from([("Bob", 0), ("Alice", 1)]));
    assert_eq!(result.len(), 2);
    assert_eq!(result.get("Bob"), Some(&1));
    assert_eq!(result.get("Alice"), Some(&2));
}

#[test]
fn test_map_set() {
    let result = map(add(1))(HashSet::from([1, 2, 3]));
    assert_eq!(result, HashSet::from([2, 3, 4]));
}

#[test]
fn test_map_set_deduplicates_collisions() {
    let result = map(|x: i32| x % 2)(BTreeSet::from([1, 2, 3, 4]));
    assert_eq!(result, BTreeSet::from([0, 1]));
}

#[test]
fn test_map_mapping_keeps_keys() {
    let result = map(add(1))(HashMap::from([("Bob", 0), ("Alice", 1)]));
    assert_eq!(result.len(), 2);
    assert_eq!(result["Bob"], 1);
    assert_eq!(result["Alice"], 2);
}

#[test]
fn test_map_lazy_sequence() {
    let result: Vec<i32> = map(add(1))(one_two_three()).collect();
    assert_eq!(result, vec![2, 3, 4]);
}

#[rstest]
#[case(vec![], vec![])]
#[case(vec![0], vec![1])]
#[case(vec![-1, 1], vec![0, 2])]
fn test_map_is_reusable(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
    let increment = map(add(1));
    assert_eq!(increment(input.clone()), expected);
    assert_eq!(increment(input), expected);
}

// =============================================================================
// bind tests
// =============================================================================

#[test]
fn test_bind_sequence() {
    assert_eq!(bind(|x: i32| vec![x, x, x])(vec![1]), vec![1, 1, 1]);
}

#[test]
fn test_bind_lazy_sequence() {
    let result: Vec<i32> = bind(|x: i32| [x, x, x])(LazySeq::new([1])).collect();
    assert_eq!(result, vec![1, 1, 1]);
}

#[test]
fn test_bind_set_unions_results() {
    let result = bind(|x: i32| [x, x + 1, x])(HashSet::from([1]));
    assert_eq!(result, HashSet::from([1, 2]));
}

#[test]
fn test_bind_to_empty_results_in_empty() {
    let result = bind(|_: i32| Vec::<i32>::new())(vec![1, 2, 3]);
    assert!(result.is_empty());
}

#[test]
fn test_bind_singleton_equals_map_identity() {
    let values = vec![4, 5, 6];
    assert_eq!(bind(|x: i32| vec![x])(values.clone()), map(|x: i32| x)(values));
}

// =============================================================================
// fold_left tests
// =============================================================================

#[test]
fn test_fold_left_sequence() {
    assert_eq!(fold_left(add, 0)(vec![1, 2, 3]), 6);
}

#[test]
fn test_fold_left_set() {
    assert_eq!(fold_left(add, 0)(HashSet::from([1, 2, 3])), 6);
}

#[test]
fn test_fold_left_mapping_through_over_right() {
    assert_eq!(fold_left(over_right(add)(second), 0)(people()), 6);
}

#[test]
fn test_fold_left_string_characters() {
    assert_eq!(fold_left(over_right(add)(parse_digit), 0)("123".chars()), 6);
}

#[test]
fn test_fold_left_lazy_sequence() {
    assert_eq!(fold_left(add, 0)(one_two_three()), 6);
}

#[test]
fn test_fold_left_order() {
    let append = |accumulator: String| move |character: char| format!("{accumulator}{character}");
    assert_eq!(fold_left(append, String::new())("abc".chars()), "abc");
}

// =============================================================================
// fold_right tests
// =============================================================================

#[test]
fn test_fold_right_sequence() {
    assert_eq!(fold_right(add, 0)(vec![1, 2, 3]), 6);
}

#[test]
fn test_fold_right_set() {
    assert_eq!(fold_right(add, 0)(BTreeSet::from([1, 2, 3])), 6);
}

#[test]
fn test_fold_right_mapping_through_over_left() {
    assert_eq!(fold_right(over_left(add)(second), 0)(people()), 6);
}

#[test]
fn test_fold_right_string_characters() {
    assert_eq!(fold_right(over_left(add)(parse_digit), 0)("123".chars()), 6);
}

#[test]
fn test_fold_right_lazy_sequence() {
    assert_eq!(fold_right(add, 0)(one_two_three()), 6);
}

#[test]
fn test_fold_right_traverses_forward() {
    let push = |element: i32| {
        move |mut accumulator: Vec<i32>| {
            accumulator.push(element);
            accumulator
        }
    };
    assert_eq!(fold_right(push, Vec::new())(vec![1, 2, 3]), vec![1, 2, 3]);
}

// =============================================================================
// partition tests
// =============================================================================

#[test]
fn test_partition_even_and_odd() {
    let (evens, odds) = partition(|x: &i32| x % 2 == 0)(vec![1, 2, 3, 4]);
    assert_eq!(evens, vec![2, 4]);
    assert_eq!(odds, vec![1, 3]);
}

#[test]
fn test_partition_set_into_sequences() {
    let (small, large) = partition(|x: &i32| *x < 10)(BTreeSet::from([30, 1, 20, 2]));
    assert_eq!(small, vec![1, 2]);
    assert_eq!(large, vec![20, 30]);
}

#[test]
fn test_partition_all_match() {
    let (matching, non_matching) = partition(|_: &char| true)("xyz".chars());
    assert_eq!(matching, vec!['x', 'y', 'z']);
    assert!(non_matching.is_empty());
}

// =============================================================================
// insert tests
// =============================================================================

#[test]
fn test_insert_sequence_and_set() {
    let mut sequence = vec![1];
    insert(&mut sequence, 2);
    assert_eq!(sequence, vec![1, 2]);

    let mut set = HashSet::from([1]);
    insert(insert(&mut set, 1), 2);
    assert_eq!(set, HashSet::from([1, 2]));
}

#[test]
fn test_insert_mapping_and_record() {
    let mut mapping = BTreeMap::new();
    insert(&mut mapping, ("Bob", 1));
    insert(&mut mapping, ("Bob", 2));
    assert_eq!(mapping, BTreeMap::from([("Bob", 2)]));

    let mut record = Record::new();
    insert(insert(&mut record, ("Alice", 'a')), ("Bob", 'b'));
    assert_eq!(record.keys().collect::<Vec<_>>(), vec!["Alice", "Bob"]);
}
