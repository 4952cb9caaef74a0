//! In-process event bus backed by a tokio broadcast channel.

use tokio::sync::broadcast;
use tokio::sync::broadcast::error::TryRecvError;

use iotsim_domain::event::Event;

use crate::ports::EventPublisher;

/// In-process event bus using a tokio [`broadcast`] channel.
///
/// Publishing succeeds even when there are no active subscribers
/// (the event is simply dropped).
pub struct InProcessEventBus {
    sender: broadcast::Sender<Event>,
}

impl InProcessEventBus {
    /// Create a new event bus with the given channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Subscribe to events on this bus.
    ///
    /// Returns a receiver that will get all events published *after*
    /// the subscription is created.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}

impl EventPublisher for InProcessEventBus {
    fn publish(&self, event: Event) {
        tracing::trace!(event_type = %event.event_type, device_id = %event.device_id, "publish");
        // send fails only when there are zero receivers
        let _ = self.sender.send(event);
    }
}

/// Take every event currently buffered in `receiver`, in publication order.
///
/// Events overwritten because the subscriber lagged behind are skipped with
/// a warning.
pub fn drain(receiver: &mut broadcast::Receiver<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    loop {
        match receiver.try_recv() {
            Ok(event) => events.push(event),
            Err(TryRecvError::Lagged(missed)) => {
                tracing::warn!(missed, "event subscriber lagged, events dropped");
            }
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
        }
    }
    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use iotsim_domain::event::EventType;
    use iotsim_domain::id::DeviceId;

    #[test]
    fn should_deliver_event_to_multiple_subscribers() {
        let bus = InProcessEventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        let event = Event::registered(DeviceId::new());
        let event_id = event.id;
        bus.publish(event);

        assert_eq!(drain(&mut rx1)[0].id, event_id);
        assert_eq!(drain(&mut rx2)[0].id, event_id);
    }

    #[test]
    fn should_succeed_when_no_subscribers() {
        let bus = InProcessEventBus::new(16);
        bus.publish(Event::registered(DeviceId::new()));
    }

    #[test]
    fn should_not_deliver_events_published_before_subscription() {
        let bus = InProcessEventBus::new(16);
        bus.publish(Event::registered(DeviceId::new()));

        let mut rx = bus.subscribe();
        let later = Event::registered(DeviceId::new());
        let later_id = later.id;
        bus.publish(later);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, later_id);
    }

    #[test]
    fn should_drain_in_publication_order() {
        let bus = InProcessEventBus::new(16);
        let mut rx = bus.subscribe();
        let ids: Vec<_> = (0..3).map(|_| DeviceId::new()).collect();
        for id in &ids {
            bus.publish(Event::registered(*id));
        }

        let drained: Vec<_> = drain(&mut rx).iter().map(|e| e.device_id).collect();
        assert_eq!(drained, ids);
        assert!(drain(&mut rx).is_empty());
    }

    #[test]
    fn should_skip_overwritten_events_when_lagging() {
        let bus = InProcessEventBus::new(2);
        let mut rx = bus.subscribe();
        for _ in 0..5 {
            bus.publish(Event::registered(DeviceId::new()));
        }

        let events = drain(&mut rx);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.event_type == EventType::DeviceRegistered));
    }
}
