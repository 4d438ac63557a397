//! # Subscription Types
//!
//! Handles, callback aliases, and the per-publish delivery report.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use uuid::Uuid;

/// Error type produced by a failing subscriber callback.
pub type SubscriberError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A registered subscriber callback.
///
/// Callbacks receive the published payload by reference and report failure
/// as a value. The bus never interprets the error beyond logging it and
/// recording it in the [`PublishReport`](crate::PublishReport).
pub type Subscriber<T> = Arc<dyn Fn(&T) -> Result<(), SubscriberError> + Send + Sync + 'static>;

/// Opaque handle identifying exactly one registration on a bus.
///
/// Two registrations of the same callback under the same topic yield
/// distinct handles; each is removable independently. The handle carries no
/// reference to the bus, so dropping it does not unsubscribe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    topic: String,
    id: Uuid,
}

impl SubscriptionHandle {
    pub(crate) fn new(topic: String) -> Self {
        Self {
            topic,
            id: Uuid::new_v4(),
        }
    }

    pub(crate) fn from_parts(topic: String, id: Uuid) -> Self {
        Self { topic, id }
    }

    /// The topic this handle was registered under.
    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub(crate) fn id(&self) -> Uuid {
        self.id
    }
}

impl fmt::Display for SubscriptionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.topic, self.id)
    }
}

/// A subscriber callback that failed during a publish.
///
/// Failures are isolated: the bus records them and keeps notifying the
/// remaining subscribers of the same publish.
#[derive(Debug, Error)]
#[error("subscriber {handle} failed: {source}")]
pub struct SubscriberFailure {
    /// Handle of the failing registration.
    pub handle: SubscriptionHandle,

    /// The error the callback returned.
    #[source]
    pub source: SubscriberError,
}

/// Outcome of a single publish call.
#[derive(Debug, Default)]
pub struct PublishReport {
    /// Number of callbacks that ran and returned `Ok`.
    pub delivered: usize,

    /// Callbacks that ran and returned an error, in invocation order.
    pub failures: Vec<SubscriberFailure>,
}

impl PublishReport {
    /// `true` when no subscriber failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    /// Total callbacks invoked, successful or not.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.delivered + self.failures.len()
    }
}
