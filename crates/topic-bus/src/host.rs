//! # Event Host
//!
//! Interface composition for types that carry a bus.

use crate::bus::TopicBus;
use crate::subscription::{PublishReport, SubscriberError, SubscriptionHandle};

/// Gives any type holding a [`TopicBus`] the full subscribe/publish surface.
///
/// Implementors provide the single accessor; the rest is supplied. This is
/// the composition answer to bolting event methods onto arbitrary objects:
/// the capability lives in a field, the surface in the trait.
///
/// ```
/// use topic_bus::{EventHost, TopicBus};
///
/// struct SalesOffice {
///     events: TopicBus<u64>,
/// }
///
/// impl EventHost<u64> for SalesOffice {
///     fn event_bus(&self) -> &TopicBus<u64> {
///         &self.events
///     }
/// }
///
/// let office = SalesOffice { events: TopicBus::new() };
/// office.subscribe("sqm88", |price: &u64| {
///     assert_eq!(*price, 2_000_000);
///     Ok(())
/// });
/// let report = office.publish("sqm88", &2_000_000);
/// assert_eq!(report.delivered, 1);
/// ```
pub trait EventHost<T> {
    /// The bus backing this host.
    fn event_bus(&self) -> &TopicBus<T>;

    /// Register `callback` under `topic` on the backing bus.
    fn subscribe<F>(&self, topic: impl Into<String>, callback: F) -> SubscriptionHandle
    where
        F: Fn(&T) -> Result<(), SubscriberError> + Send + Sync + 'static,
    {
        self.event_bus().subscribe(topic, callback)
    }

    /// Publish `payload` to `topic` on the backing bus.
    fn publish(&self, topic: &str, payload: &T) -> PublishReport {
        self.event_bus().publish(topic, payload)
    }

    /// Remove one registration from the backing bus.
    fn unsubscribe(&self, handle: &SubscriptionHandle) -> bool {
        self.event_bus().unsubscribe(handle)
    }
}
