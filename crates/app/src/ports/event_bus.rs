//! Event bus port — where the registry reports what devices did.

use iotsim_domain::event::Event;

/// Publishes domain events to interested subscribers.
///
/// Publishing is fire-and-forget: a sink that cannot deliver an event
/// drops it.
pub trait EventPublisher {
    /// Publish an event to all current subscribers.
    fn publish(&self, event: Event);
}
