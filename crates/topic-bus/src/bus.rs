//! # Topic Bus
//!
//! The in-memory bus mapping topic names to ordered subscriber lists.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, warn};
use uuid::Uuid;

use crate::subscription::{
    PublishReport, Subscriber, SubscriberError, SubscriberFailure, SubscriptionHandle,
};

/// One registration under a topic.
struct Registration<T> {
    id: Uuid,
    callback: Subscriber<T>,
}

impl<T> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            callback: Arc::clone(&self.callback),
        }
    }
}

/// Synchronous topic-keyed event bus.
///
/// Subscribers for a topic are invoked in registration order on every
/// publish. The subscriber map is guarded by a single [`RwLock`]; every
/// operation takes `&self`, so the bus can be shared across threads behind
/// an [`Arc`].
///
/// `publish` clones the topic's registration list under the read lock and
/// releases the lock before invoking anything. Consequences:
///
/// - callbacks may freely call `publish`, `subscribe`, or `unsubscribe` on
///   the same bus without deadlocking;
/// - a nested publish observes the registration lists as they stand at the
///   moment it is issued;
/// - subscriptions added or removed while a publish is in flight affect
///   future publishes only, never the snapshot already taken.
pub struct TopicBus<T> {
    /// Topic name -> registrations, in registration order.
    topics: RwLock<HashMap<String, Vec<Registration<T>>>>,

    /// Total publish calls, including those that reached no subscribers.
    events_published: AtomicU64,
}

impl<T> TopicBus<T> {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self {
            topics: RwLock::new(HashMap::new()),
            events_published: AtomicU64::new(0),
        }
    }

    /// Register `callback` under `topic`, after any existing subscribers.
    ///
    /// The topic's list is created lazily on first subscription. The same
    /// callback may be registered any number of times; each call returns a
    /// distinct handle removing only its own registration.
    pub fn subscribe<F>(&self, topic: impl Into<String>, callback: F) -> SubscriptionHandle
    where
        F: Fn(&T) -> Result<(), SubscriberError> + Send + Sync + 'static,
    {
        let topic = topic.into();
        let handle = SubscriptionHandle::new(topic.clone());

        let mut topics = self.write_topics();
        topics.entry(topic).or_default().push(Registration {
            id: handle.id(),
            callback: Arc::new(callback),
        });

        debug!(topic = %handle.topic(), id = %handle.id(), "subscriber registered");
        handle
    }

    /// Notify every current subscriber of `topic`, in registration order.
    ///
    /// A failing callback is recorded in the report and logged; remaining
    /// subscribers still run. Publishing a topic with no subscribers is a
    /// no-op returning an empty report.
    pub fn publish(&self, topic: &str, payload: &T) -> PublishReport {
        self.events_published.fetch_add(1, Ordering::Relaxed);

        // Snapshot, then invoke outside the lock.
        let snapshot: Vec<Registration<T>> = {
            let topics = self.read_topics();
            topics.get(topic).cloned().unwrap_or_default()
        };

        if snapshot.is_empty() {
            warn!(topic, "event dropped (no subscribers)");
            return PublishReport::default();
        }

        let mut report = PublishReport::default();
        for registration in &snapshot {
            match (registration.callback)(payload) {
                Ok(()) => report.delivered += 1,
                Err(source) => {
                    warn!(
                        topic,
                        id = %registration.id,
                        error = %source,
                        "subscriber failed, continuing with remaining subscribers"
                    );
                    report.failures.push(SubscriberFailure {
                        handle: SubscriptionHandle::from_parts(topic.to_string(), registration.id),
                        source,
                    });
                }
            }
        }

        debug!(
            topic,
            delivered = report.delivered,
            failed = report.failures.len(),
            "event published"
        );
        report
    }

    /// Remove the one registration identified by `handle`.
    ///
    /// Returns `true` if a registration was removed. Unknown or
    /// already-removed handles are a no-op returning `false`. An emptied
    /// topic entry is kept; it costs nothing and keeps removal simple.
    pub fn unsubscribe(&self, handle: &SubscriptionHandle) -> bool {
        let mut topics = self.write_topics();
        let Some(registrations) = topics.get_mut(handle.topic()) else {
            debug!(handle = %handle, "unsubscribe for unknown topic ignored");
            return false;
        };

        let before = registrations.len();
        registrations.retain(|registration| registration.id != handle.id());
        let removed = registrations.len() < before;

        if removed {
            debug!(handle = %handle, "subscriber removed");
        } else {
            debug!(handle = %handle, "stale unsubscribe ignored");
        }
        removed
    }

    /// Number of registrations currently held for `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: &str) -> usize {
        self.read_topics().get(topic).map_or(0, Vec::len)
    }

    /// Number of topic entries, including emptied ones.
    #[must_use]
    pub fn topic_count(&self) -> usize {
        self.read_topics().len()
    }

    /// Total publish calls made against this bus.
    #[must_use]
    pub fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }

    fn read_topics(&self) -> RwLockReadGuard<'_, HashMap<String, Vec<Registration<T>>>> {
        self.topics.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_topics(&self) -> RwLockWriteGuard<'_, HashMap<String, Vec<Registration<T>>>> {
        self.topics.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for TopicBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
