//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which threads a value through a
//! sequence of unary functions, from left to right.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`.
///
/// Each function receives the result of the previous one, so the output type
/// of every step must match the input type of the next. For a runtime list of
/// same-typed functions, see [`pipe_all`](crate::compose::pipe_all).
///
/// # Relationship with compose!
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(f, g, h)(x)`.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g(f(x))`
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once.
///
/// # Examples
///
/// ```
/// use polycomb::pipe;
///
/// let result = pipe!(2, |x: i32| x + 1, |x: i32| x * 3);
/// assert_eq!(result, 9);
/// ```
///
/// ## Through collection operations
///
/// ```
/// use polycomb::pipe;
/// use polycomb::collection::{by, map, partition, sort};
///
/// let (evens, odds) = pipe!(
///     vec![5, 3, 4, 1, 2],
///     sort(by(|x: &i32| *x)),
///     map(|x: i32| x * 10),
///     partition(|x: &i32| x % 20 == 0)
/// );
/// assert_eq!(evens, vec![20, 40]);
/// assert_eq!(odds, vec![10, 30, 50]);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };

    ($value:expr, $function:expr $(,)?) => {
        $function($value)
    };

    ($value:expr, $function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::pipe!($function($value), $($remaining_functions),+)
    };
}
