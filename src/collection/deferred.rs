//! Deferred values - a single result available in the future.
//!
//! A [`Deferred<T, E>`] resolves to `Ok(T)` or to a fault `Err(E)`. Mapping
//! attaches a continuation that transforms the eventual result; binding
//! chains onto another deferred value. Faults propagate unchanged through
//! both.
//!
//! Continuations are attached immediately and run when the deferred value is
//! awaited. Nothing blocks.
//!
//! # Examples
//!
//! ```rust,ignore
//! use polycomb::collection::{Deferred, bind, map};
//!
//! #[tokio::main]
//! async fn main() {
//!     let answer = map(|x: i32| x + 1)(Deferred::<i32, String>::resolved(41));
//!     assert_eq!(answer.await, Ok(42));
//!
//!     let chained = bind(|x: i32| Deferred::<_, String>::resolved(x * 2))(Deferred::<i32, String>::resolved(21));
//!     assert_eq!(chained.await, Ok(42));
//! }
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::future::{self, BoxFuture, FutureExt, TryFutureExt};

use super::bindable::Bindable;
use super::mappable::Mappable;

/// A value resolved asynchronously, or a fault of type `E`.
///
/// `Deferred` is a boxed, `Send` future of `Result<T, E>` and can be awaited
/// directly.
#[must_use = "deferred values do nothing unless awaited"]
pub struct Deferred<T, E> {
    future: BoxFuture<'static, Result<T, E>>,
}

static_assertions::assert_impl_all!(Deferred<i32, String>: Send, Unpin);

impl<T, E> Deferred<T, E> {
    /// Wraps a future resolving to `Result<T, E>`.
    pub fn new<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self {
            future: future.boxed(),
        }
    }

    /// Creates a deferred value that is already resolved to `value`.
    pub fn resolved(value: T) -> Self
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        Self::new(future::ok(value))
    }

    /// Creates a deferred value that is already faulted with `error`.
    pub fn rejected(error: E) -> Self
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        Self::new(future::err(error))
    }

    /// Creates a deferred value that is already settled with `result`.
    pub fn settled(result: Result<T, E>) -> Self
    where
        T: Send + 'static,
        E: Send + 'static,
    {
        Self::new(future::ready(result))
    }
}

impl<T, E> Future for Deferred<T, E> {
    type Output = Result<T, E>;

    fn poll(mut self: Pin<&mut Self>, context: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.poll_unpin(context)
    }
}

impl<T, E> fmt::Debug for Deferred<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Deferred").finish_non_exhaustive()
    }
}

impl<T, E, B, F> Mappable<F> for Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
    B: Send + 'static,
    F: FnOnce(T) -> B + Send + 'static,
{
    type Output = Deferred<B, E>;

    fn map_each(self, function: F) -> Deferred<B, E> {
        Deferred::new(self.future.map_ok(function))
    }
}

impl<T, E, B, R, F> Bindable<F> for Deferred<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
    B: Send + 'static,
    R: Future<Output = Result<B, E>> + Send + 'static,
    F: FnOnce(T) -> R + Send + 'static,
{
    type Output = Deferred<B, E>;

    fn bind_each(self, function: F) -> Deferred<B, E> {
        Deferred::new(self.future.and_then(function))
    }
}
