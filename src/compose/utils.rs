//! Point-free combinators.
//!
//! This module provides the identity function and three wrappers that
//! pre-process the arguments of a curried binary function before calling it:
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`over_both`]: Pre-processes both arguments (D combinator)
//! - [`over_right`]: Pre-processes only the right argument (DR)
//! - [`over_left`]: Pre-processes only the left argument (DL)
//!
//! The wrapped function is curried: it takes the left argument and returns a
//! function of the right argument. The wrappers return [`Curried`] closures
//! that can be applied any number of times; pre-processors run when both
//! arguments have been supplied.

use std::rc::Rc;

/// A reusable curried binary function: `Fn(A) -> Fn(B) -> Z`.
///
/// This is the shape returned by [`over_both`], [`over_right`] and
/// [`over_left`].
pub type Curried<A, B, Z> = Box<dyn Fn(A) -> Box<dyn Fn(B) -> Z>>;

/// Returns the value unchanged.
///
/// In combinatory logic, this is known as the I combinator.
///
/// # Examples
///
/// ```
/// use polycomb::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Pre-processes both arguments of a curried binary function.
///
/// `over_both(f)(pre_left, pre_right)(a)(b)` is `f(pre_left(a))(pre_right(b))`.
///
/// # Type Parameters
///
/// * `X`, `Y` - The argument types of the wrapped function
/// * `Z` - The result type of the wrapped function
/// * `A`, `B` - The argument types accepted by the pre-processors
///
/// # Examples
///
/// ```
/// use polycomb::compose::over_both;
///
/// fn add(left: f64) -> impl Fn(f64) -> f64 {
///     move |right| left + right
/// }
///
/// fn parse_float(text: &'static str) -> f64 {
///     text.parse().unwrap_or(f64::NAN)
/// }
///
/// let add_text = over_both(add)(parse_float, parse_float);
/// assert_eq!(add_text("1")("2"), 3.0);
/// ```
pub fn over_both<X, Y, Z, A, B, Inner, F, G, H>(function: F) -> impl Fn(G, H) -> Curried<A, B, Z>
where
    F: Fn(X) -> Inner + 'static,
    Inner: FnOnce(Y) -> Z,
    G: Fn(A) -> X + 'static,
    H: Fn(B) -> Y + 'static,
    A: Clone + 'static,
    B: 'static,
    Z: 'static,
{
    let function = Rc::new(function);
    move |pre_left: G, pre_right: H| -> Curried<A, B, Z> {
        let function = Rc::clone(&function);
        let pre_left = Rc::new(pre_left);
        let pre_right = Rc::new(pre_right);
        Box::new(move |left: A| -> Box<dyn Fn(B) -> Z> {
            let function = Rc::clone(&function);
            let pre_left = Rc::clone(&pre_left);
            let pre_right = Rc::clone(&pre_right);
            Box::new(move |right: B| function(pre_left(left.clone()))(pre_right(right)))
        })
    }
}

/// Pre-processes only the right (second) argument of a curried binary function.
///
/// `over_right(f)(pre_right)(a)(b)` is `f(a)(pre_right(b))`.
///
/// # Examples
///
/// ```
/// use polycomb::compose::over_right;
///
/// fn add(left: i32) -> impl Fn(i32) -> i32 {
///     move |right| left + right
/// }
///
/// let add_length = over_right(add)(|text: String| text.len() as i32);
/// assert_eq!(add_length(1)("abc".to_string()), 4);
/// ```
pub fn over_right<X, Y, Z, B, Inner, F, H>(function: F) -> impl Fn(H) -> Curried<X, B, Z>
where
    F: Fn(X) -> Inner + 'static,
    Inner: FnOnce(Y) -> Z,
    H: Fn(B) -> Y + 'static,
    X: Clone + 'static,
    B: 'static,
    Z: 'static,
{
    let function = Rc::new(function);
    move |pre_right: H| -> Curried<X, B, Z> {
        let function = Rc::clone(&function);
        let pre_right = Rc::new(pre_right);
        Box::new(move |left: X| -> Box<dyn Fn(B) -> Z> {
            let function = Rc::clone(&function);
            let pre_right = Rc::clone(&pre_right);
            Box::new(move |right: B| function(left.clone())(pre_right(right)))
        })
    }
}

/// Pre-processes only the left (first) argument of a curried binary function.
///
/// `over_left(f)(pre_left)(a)(b)` is `f(pre_left(a))(b)`.
///
/// # Examples
///
/// ```
/// use polycomb::compose::over_left;
///
/// fn subtract(left: i32) -> impl Fn(i32) -> i32 {
///     move |right| left - right
/// }
///
/// let subtract_from_length = over_left(subtract)(|text: String| text.len() as i32);
/// assert_eq!(subtract_from_length("hello".to_string())(2), 3);
/// ```
pub fn over_left<X, Y, Z, A, Inner, F, G>(function: F) -> impl Fn(G) -> Curried<A, Y, Z>
where
    F: Fn(X) -> Inner + 'static,
    Inner: FnOnce(Y) -> Z,
    G: Fn(A) -> X + 'static,
    A: Clone + 'static,
    Y: 'static,
    Z: 'static,
{
    let function = Rc::new(function);
    move |pre_left: G| -> Curried<A, Y, Z> {
        let function = Rc::clone(&function);
        let pre_left = Rc::new(pre_left);
        Box::new(move |left: A| -> Box<dyn Fn(Y) -> Z> {
            let function = Rc::clone(&function);
            let pre_left = Rc::clone(&pre_left);
            Box::new(move |right: Y| function(pre_left(left.clone()))(right))
        })
    }
}
