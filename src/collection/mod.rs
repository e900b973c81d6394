//! Shape-polymorphic collection operations.
//!
//! Every operation here is curried: calling it with its configuration (a
//! function, comparator, predicate or seed) returns a reusable closure that is
//! then applied to the collection.
//!
//! - [`map`] and [`bind`] preserve the shape of their input.
//! - [`fold_left`], [`fold_right`], [`sort`] and [`partition`] accept anything
//!   iterable. Mappings are iterated as `(key, value)` pairs.
//! - [`insert`] mutates a container in place and hands it back.
//!
//! Supported shapes are resolved at compile time through the [`Mappable`],
//! [`Bindable`] and [`Insertable`] traits; an unsupported shape is a type
//! error rather than a runtime failure. For runtime dispatch over dynamic data
//! see the `value` module.
//!
//! # Examples
//!
//! ```rust
//! use polycomb::collection::{by, fold_left, map, partition, sort};
//! use std::collections::BTreeSet;
//!
//! let words = vec!["pear", "fig", "banana"];
//! let lengths = map(|word: &str| word.len())(words.clone());
//! assert_eq!(lengths, vec![4, 3, 6]);
//!
//! let sorted = sort(by(|word: &&str| word.len()))(words);
//! assert_eq!(sorted, vec!["fig", "pear", "banana"]);
//!
//! let set = BTreeSet::from([1, 2, 3, 4]);
//! let (small, large) = partition(|x: &i32| *x <= 2)(set);
//! assert_eq!((small, large), (vec![1, 2], vec![3, 4]));
//!
//! let total = fold_left(|sum: usize| move |length: usize| sum + length, 0)(lengths);
//! assert_eq!(total, 13);
//! ```

mod bindable;
#[cfg(feature = "async")]
mod deferred;
mod fold;
mod insert;
mod lazy_seq;
mod mappable;
mod partition;
mod record;
mod sort;

pub use bindable::{Bindable, bind};
#[cfg(feature = "async")]
pub use deferred::Deferred;
pub use fold::{fold_left, fold_right};
pub use insert::{Insertable, insert};
pub use lazy_seq::LazySeq;
pub use mappable::{Mappable, map};
pub use partition::partition;
pub use record::Record;
pub use sort::{by, sort, sort_in_place};
