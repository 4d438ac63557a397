//! # Once Invoker - At-Most-Once Call Wrappers
//!
//! Wraps an arbitrary computation so repeated invocation returns the first
//! computed result without recomputation. Useful for lazily building a
//! resource that must exist exactly once: the construction cost and its
//! side effects happen on the first successful call only.
//!
//! Two flavors:
//!
//! - [`Memo`] — single-threaded, owns a `FnMut` computation, `call(&mut self)`.
//! - [`SharedMemo`] — `&self` API behind a mutex, safe to share across
//!   threads; the at-most-once guarantee holds under real parallelism.
//!
//! Both cache success only. A failed computation propagates its error and
//! leaves the wrapper incomplete, so the next call re-attempts.

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod memo;
pub mod shared;

// Re-export main types
pub use memo::Memo;
pub use shared::SharedMemo;
