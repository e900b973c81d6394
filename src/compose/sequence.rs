//! Pipelines over a runtime sequence of functions.
//!
//! [`pipe!`](crate::pipe!) and [`compose!`](crate::compose!) accept a fixed
//! list of functions whose types may differ from step to step. When the steps
//! are only known at runtime (a `Vec` of boxed closures, an iterator of
//! function pointers), they must share one type `T -> T`, and the functions in
//! this module apply them.

/// Applies `functions` to `value` in iteration order, threading each result
/// into the next function.
///
/// An empty sequence returns `value` unchanged.
///
/// # Examples
///
/// ```
/// use polycomb::compose::pipe_all;
///
/// let steps: [Box<dyn Fn(i32) -> i32>; 2] = [Box::new(|x: i32| x + 1), Box::new(|x: i32| x * 3)];
/// assert_eq!(pipe_all(2, steps), 9);
/// ```
pub fn pipe_all<T, F, I>(value: T, functions: I) -> T
where
    I: IntoIterator<Item = F>,
    F: FnOnce(T) -> T,
{
    functions
        .into_iter()
        .fold(value, |accumulator, function| function(accumulator))
}

/// Collects `functions` into a reusable unary function that behaves like
/// [`pipe_all`] with the same sequence.
///
/// # Examples
///
/// ```
/// use polycomb::compose::compose_all;
///
/// let steps: [fn(i32) -> i32; 2] = [|x| x + 1, |x| x * 3];
/// let pipeline = compose_all(steps);
/// assert_eq!(pipeline(2), 9);
/// assert_eq!(pipeline(0), 3);
/// ```
pub fn compose_all<T, F, I>(functions: I) -> impl Fn(T) -> T
where
    I: IntoIterator<Item = F>,
    F: Fn(T) -> T,
{
    let functions: Vec<F> = functions.into_iter().collect();
    move |input| {
        functions
            .iter()
            .fold(input, |accumulator, function| function(accumulator))
    }
}
