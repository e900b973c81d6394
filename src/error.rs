//! Error types for runtime-dispatched collection operations.
//!
//! The statically typed operations in [`collection`](crate::collection)
//! reject unsupported shapes at compile time. Operations that dispatch on a
//! runtime value (see the `value` module) report the same condition
//! through [`CollectionError`].

use thiserror::Error;

/// Represents errors raised when an operation receives a value it cannot
/// treat as a collection.
///
/// # Examples
///
/// ```rust
/// use polycomb::error::CollectionError;
///
/// let error = CollectionError::InvalidCollectionType {
///     operation: "map",
///     found: "null",
/// };
/// assert_eq!(error.to_string(), "map: invalid collection type (found null)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// The input is absent or does not match any recognized container shape.
    #[error("{operation}: invalid collection type (found {found})")]
    InvalidCollectionType {
        /// The operation that rejected the input.
        operation: &'static str,
        /// The name of the rejected shape.
        found: &'static str,
    },

    /// A keyed insert received something other than a `[key, value]` pair.
    #[error("insert: expected a [key, value] pair for a record target (found {found})")]
    InvalidEntry {
        /// The name of the rejected element shape.
        found: &'static str,
    },
}

impl CollectionError {
    /// Creates an [`CollectionError::InvalidCollectionType`] and records it
    /// as a `debug` event.
    #[must_use]
    pub fn invalid_collection_type(operation: &'static str, found: &'static str) -> Self {
        tracing::debug!(operation, found, "rejected unsupported collection shape");
        Self::InvalidCollectionType { operation, found }
    }

    /// Returns `true` if this is an [`CollectionError::InvalidCollectionType`].
    #[inline]
    pub const fn is_invalid_collection_type(&self) -> bool {
        matches!(self, Self::InvalidCollectionType { .. })
    }
}
