//! # Topic Bus - Synchronous Topic-Keyed Event Bus
//!
//! Lets independent parties register interest in named topics and be
//! notified, in registration order, whenever the topic is published.
//!
//! ```text
//! ┌──────────────┐                    ┌──────────────┐
//! │  Publisher   │                    │  Subscriber  │
//! │              │    publish()       │              │
//! │              │ ──────┐            │              │
//! └──────────────┘       │            └──────────────┘
//!                        ▼                    ↑
//!                  ┌──────────────┐          │
//!                  │  Topic Bus   │          │
//!                  │              │ ─────────┘
//!                  └──────────────┘  subscribe()
//! ```
//!
//! ## Delivery rules
//!
//! - Subscribers of a topic run in registration order, once each per publish.
//! - Publishing a topic nobody subscribed to is a no-op, not an error.
//! - A failing subscriber is isolated: its error lands in the
//!   [`PublishReport`] and the remaining subscribers still run.
//! - Removal is by [`SubscriptionHandle`] only; stale handles are a no-op.
//!
//! ## Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use topic_bus::TopicBus;
//!
//! let bus: TopicBus<u32> = TopicBus::new();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let sink = Arc::clone(&seen);
//! let handle = bus.subscribe("price", move |value: &u32| {
//!     sink.lock().unwrap().push(*value);
//!     Ok(())
//! });
//!
//! bus.publish("price", &88);
//! bus.unsubscribe(&handle);
//! bus.publish("price", &100);
//!
//! assert_eq!(seen.lock().unwrap().as_slice(), &[88]);
//! ```

// Nursery lints that are too strict
#![allow(clippy::missing_const_for_fn)]
// Allow in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::panic))]

pub mod bus;
pub mod host;
pub mod subscription;

// Re-export main types
pub use bus::TopicBus;
pub use host::EventHost;
pub use subscription::{
    PublishReport, Subscriber, SubscriberError, SubscriberFailure, SubscriptionHandle,
};
