//! Combinators and left-to-right pipelines.
//!
//! This module provides the point-free building blocks of the crate:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`over_both`], [`over_right`], [`over_left`]: Pre-process the arguments
//!   of a curried binary function before calling it
//! - [`pipe!`]: Apply a value through functions, left to right
//! - [`compose!`]: Build a function that pipes its input, left to right
//! - [`pipe_all`], [`compose_all`]: The same over a runtime sequence of
//!   same-typed functions
//!
//! # Examples
//!
//! ## Pipeline
//!
//! ```
//! use polycomb::pipe;
//!
//! // pipe!(x, f, g) = g(f(x))
//! assert_eq!(pipe!(2, |x: i32| x + 1, |x: i32| x * 3), 9);
//! ```
//!
//! ## Composition
//!
//! ```
//! use polycomb::compose;
//!
//! // compose!(f, g)(x) = g(f(x))
//! let add_then_triple = compose!(|x: i32| x + 1, |x: i32| x * 3);
//! assert_eq!(add_then_triple(2), 9);
//! ```
//!
//! ## Argument pre-processing
//!
//! ```
//! use polycomb::compose::{over_left, over_right};
//! use polycomb::collection::{fold_left, fold_right};
//! use std::collections::BTreeMap;
//!
//! fn add(left: i32) -> impl Fn(i32) -> i32 {
//!     move |right| left + right
//! }
//!
//! fn second(entry: (String, i32)) -> i32 {
//!     entry.1
//! }
//!
//! let scores = BTreeMap::from([("Alice".to_string(), 2), ("Bob".to_string(), 1)]);
//! assert_eq!(fold_left(over_right(add)(second), 0)(scores.clone()), 3);
//! assert_eq!(fold_right(over_left(add)(second), 0)(scores), 3);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Pipe Equivalence**: `compose!(f, g, h)(x) == pipe!(x, f, g, h)`

mod compose_macro;
mod pipe_macro;
mod sequence;
mod utils;

pub use sequence::{compose_all, pipe_all};
pub use utils::{Curried, identity, over_both, over_left, over_right};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
