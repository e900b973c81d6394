//! # polycomb
//!
//! Polymorphic data combinators for Rust: point-free helpers, shape-preserving
//! collection operations and left-to-right pipelines.
//!
//! ## Overview
//!
//! - **Combinators**: [`identity`](compose::identity) and the argument
//!   pre-processing wrappers [`over_both`](compose::over_both),
//!   [`over_right`](compose::over_right) and [`over_left`](compose::over_left)
//! - **Pipelines**: [`pipe!`], [`compose!`], [`pipe_all`](compose::pipe_all),
//!   [`compose_all`](compose::compose_all)
//! - **Collection Operations**: `map`, `bind`, `sort`/`by`, `fold_left`,
//!   `fold_right`, `partition` and `insert` over sequences, sets, mappings,
//!   records, deferred values and lazy sequences
//! - **Dynamic Values**: the same operations dispatched at runtime over
//!   `serde_json::Value`, failing with
//!   [`CollectionError::InvalidCollectionType`](error::CollectionError) on
//!   unsupported shapes
//!
//! ## Feature Flags
//!
//! - `compose`: Combinators and pipelines
//! - `collection`: Shape-polymorphic collection operations
//! - `async`: [`Deferred`](collection::Deferred) values (pulls in `futures`)
//! - `json`: Runtime dispatch over `serde_json::Value`
//! - `serde`: `Serialize`/`Deserialize` for [`Record`](collection::Record)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use polycomb::prelude::*;
//!
//! let doubled = map(|x: i32| x * 2)(vec![1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let sum = fold_left(|accumulator: i32| move |element: i32| accumulator + element, 0)(doubled);
//! assert_eq!(sum, 12);
//!
//! assert_eq!(pipe!(2, |x: i32| x + 1, |x: i32| x * 3), 9);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use polycomb::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    pub use crate::error::CollectionError;
}

pub mod error;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "json")]
pub mod value;
