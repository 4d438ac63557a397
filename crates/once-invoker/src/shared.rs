//! # Shared Memo
//!
//! Thread-safe at-most-once call wrapper.

use std::convert::Infallible;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::memo::Memo;

/// Thread-safe variant of [`Memo`].
///
/// All methods take `&self`, so a `SharedMemo` can sit behind an `Arc` and
/// be called from many threads. The internal mutex is held across the first
/// computation: when several threads race on an incomplete memo, one runs
/// the computation and the rest block, then replay the stored result. That
/// keeps the at-most-once guarantee hard under real parallelism.
pub struct SharedMemo<A, T, E> {
    inner: Mutex<Memo<A, T, E>>,
}

impl<A, T: Clone, E> SharedMemo<A, T, E> {
    /// Wrap a fallible computation.
    pub fn new<F>(compute: F) -> Self
    where
        F: FnMut(A) -> Result<T, E> + Send + 'static,
    {
        Self {
            inner: Mutex::new(Memo::new(compute)),
        }
    }

    /// Invoke the wrapper. See [`Memo::call`] for the caching rules.
    pub fn call(&self, args: A) -> Result<T, E> {
        self.lock().call(args)
    }

    /// `true` once a result has been stored.
    ///
    /// A `false` answer can be stale by the time the caller acts on it;
    /// `call` is the only authoritative path.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.lock().is_complete()
    }

    /// Clone of the stored result, if the computation has succeeded.
    #[must_use]
    pub fn result(&self) -> Option<T> {
        self.lock().result().cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Memo<A, T, E>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<A, T: Clone> SharedMemo<A, T, Infallible> {
    /// Wrap a computation that cannot fail.
    pub fn infallible<F>(compute: F) -> Self
    where
        F: FnMut(A) -> T + Send + 'static,
    {
        Self {
            inner: Mutex::new(Memo::infallible(compute)),
        }
    }

    /// Invoke an infallible wrapper, returning the value directly.
    pub fn value(&self, args: A) -> T {
        match self.call(args) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}
