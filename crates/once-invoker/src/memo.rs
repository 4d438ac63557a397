//! # Memo
//!
//! Single-threaded at-most-once call wrapper.

use std::convert::Infallible;
use std::fmt;

use tracing::debug;

/// Wraps a computation so it runs at most once.
///
/// The first successful call executes the computation with the supplied
/// arguments, stores the value, and returns it. Every later call ignores
/// its arguments and returns a clone of the stored value; the computation
/// never runs again. This is argument-insensitive on purpose: the wrapper
/// trades flexibility for a guaranteed single execution of expensive or
/// side-effecting setup work.
///
/// Only success is cached. An `Err` propagates to that caller, the memo
/// stays incomplete, and the next call re-attempts the computation.
///
/// ```
/// use once_invoker::Memo;
///
/// let mut memo = Memo::infallible(|base: u32| {
///     // Stand-in for building some expensive resource.
///     base * 10
/// });
///
/// assert_eq!(memo.value(4), 40);
/// assert_eq!(memo.value(9), 40); // arguments after the first call are ignored
/// ```
pub struct Memo<A, T, E> {
    compute: Box<dyn FnMut(A) -> Result<T, E> + Send>,
    result: Option<T>,
}

impl<A, T: Clone, E> Memo<A, T, E> {
    /// Wrap a fallible computation.
    pub fn new<F>(compute: F) -> Self
    where
        F: FnMut(A) -> Result<T, E> + Send + 'static,
    {
        Self {
            compute: Box::new(compute),
            result: None,
        }
    }

    /// Invoke the wrapper.
    ///
    /// Runs the computation only if no result is stored yet. `args` is used
    /// on the attempt that runs the computation and ignored afterwards.
    pub fn call(&mut self, args: A) -> Result<T, E> {
        if let Some(cached) = &self.result {
            return Ok(cached.clone());
        }

        match (self.compute)(args) {
            Ok(value) => {
                debug!("computation completed, result cached");
                self.result = Some(value.clone());
                Ok(value)
            }
            Err(error) => {
                debug!("computation failed, memo stays incomplete");
                Err(error)
            }
        }
    }

    /// `true` once a result has been stored.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.result.is_some()
    }

    /// The stored result, if the computation has succeeded.
    #[must_use]
    pub fn result(&self) -> Option<&T> {
        self.result.as_ref()
    }
}

impl<A, T: Clone> Memo<A, T, Infallible> {
    /// Wrap a computation that cannot fail.
    pub fn infallible<F>(mut compute: F) -> Self
    where
        F: FnMut(A) -> T + Send + 'static,
    {
        Self::new(move |args| Ok(compute(args)))
    }

    /// Invoke an infallible wrapper, returning the value directly.
    pub fn value(&mut self, args: A) -> T {
        match self.call(args) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl<A, T: fmt::Debug, E> fmt::Debug for Memo<A, T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("complete", &self.result.is_some())
            .field("result", &self.result)
            .finish_non_exhaustive()
    }
}
