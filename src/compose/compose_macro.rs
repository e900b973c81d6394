//! The `compose!` macro for building pipelines as functions.
//!
//! This module provides the [`compose!`] macro, the deferred counterpart of
//! [`pipe!`](crate::pipe!).

/// Composes functions from left to right into a single unary function.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`, i.e. the returned
/// function behaves exactly like `pipe!(x, f, g, h)`.
///
/// Note that the functions are applied in the order they are written. This is
/// the data-flow order, not the right-to-left order of mathematical
/// composition.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Left Identity**: `compose!(identity, f) == f`
/// - **Right Identity**: `compose!(f, identity) == f`
/// - **Pipe Equivalence**: `compose!(f, g)(x) == pipe!(x, f, g)`
///
/// # Syntax
///
/// - `compose!()` - Returns [`identity`](crate::compose::identity)
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns `|x| g(f(x))`
/// - `compose!(f, g, h, ...)` - Composes any number of functions
///
/// # Examples
///
/// ```
/// use polycomb::compose;
///
/// let add_one = |x: i32| x + 1;
/// let times_three = |x: i32| x * 3;
///
/// let composed = compose!(add_one, times_three);
/// assert_eq!(composed(2), 9);
/// assert_eq!(composed(0), 3);
/// ```
///
/// ## Type conversion
///
/// ```
/// use polycomb::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let digits = compose!(to_string, get_length);
/// assert_eq!(digits(12345), 5);
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        $crate::compose::identity
    };

    ($function:expr $(,)?) => {
        $function
    };

    ($first_function:expr, $($remaining_functions:expr),+ $(,)?) => {{
        let first = $first_function;
        let remaining = $crate::compose!($($remaining_functions),+);
        move |input| remaining(first(input))
    }};
}
