use std::sync::{Arc, Mutex};

use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::{debug, warn};
use uuid::Uuid;

use super::types::{SourceEvent, Subscription};

/// Per-registration delivery channel, kept in registration order.
struct Registration {
    id: Uuid,
    sender: UnboundedSender<SourceEvent>,
}

/// Process-wide observer hub for focus and title changes.
///
/// One instance is constructed at startup by the composition root and
/// handed to whoever needs it; there is no hidden global. The handle
/// is cheap to clone. All mutation goes through the internal mutex,
/// which is never held across an await point.
#[derive(Clone)]
pub struct SourceObserver {
    inner: Arc<Mutex<Vec<Registration>>>,
}

impl SourceObserver {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Register an observer and return its event subscription.
    ///
    /// Re-registering an existing id replaces the previous
    /// registration, closing its channel.
    pub fn register(&self, id: Uuid) -> Subscription {
        let (tx, rx) = mpsc::unbounded_channel();

        let mut registrations = self.inner.lock().expect("observer registry poisoned");
        if let Some(existing) = registrations.iter_mut().find(|r| r.id == id) {
            warn!(event = "core.observer.reregistered", observer_id = %id);
            existing.sender = tx;
        } else {
            debug!(event = "core.observer.registered", observer_id = %id);
            registrations.push(Registration { id, sender: tx });
        }

        Subscription { id, events: rx }
    }

    /// Remove a registration. Unknown ids are a logged no-op: removal
    /// is treated as already-satisfied intent.
    pub fn unregister(&self, id: Uuid) {
        let mut registrations = self.inner.lock().expect("observer registry poisoned");
        let before = registrations.len();
        registrations.retain(|r| r.id != id);

        if registrations.len() == before {
            debug!(event = "core.observer.unregister_unknown", observer_id = %id);
        } else {
            debug!(event = "core.observer.unregistered", observer_id = %id);
        }
    }

    /// Number of live registrations.
    pub fn registration_count(&self) -> usize {
        self.inner.lock().expect("observer registry poisoned").len()
    }

    /// Deliver one event to every registration, exactly once each, in
    /// registration order. Registrations whose receiver has been
    /// dropped are pruned.
    pub fn broadcast(&self, event: SourceEvent) {
        let mut registrations = self.inner.lock().expect("observer registry poisoned");

        registrations.retain(|r| {
            if r.sender.send(event).is_err() {
                debug!(
                    event = "core.observer.receiver_gone",
                    observer_id = %r.id
                );
                false
            } else {
                true
            }
        });
    }
}

impl Default for SourceObserver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_reaches_every_registration_once() {
        let observer = SourceObserver::new();
        let mut first = observer.register(Uuid::new_v4());
        let mut second = observer.register(Uuid::new_v4());

        observer.broadcast(SourceEvent::FocusChanged);

        assert_eq!(first.events.try_recv().ok(), Some(SourceEvent::FocusChanged));
        assert!(first.events.try_recv().is_err(), "no duplicate delivery");
        assert_eq!(
            second.events.try_recv().ok(),
            Some(SourceEvent::FocusChanged)
        );
        assert!(second.events.try_recv().is_err(), "no duplicate delivery");
    }

    #[test]
    fn events_arrive_in_emission_order() {
        let observer = SourceObserver::new();
        let mut sub = observer.register(Uuid::new_v4());

        observer.broadcast(SourceEvent::FocusChanged);
        observer.broadcast(SourceEvent::TitlesChanged);
        observer.broadcast(SourceEvent::FocusChanged);

        assert_eq!(sub.events.try_recv().ok(), Some(SourceEvent::FocusChanged));
        assert_eq!(sub.events.try_recv().ok(), Some(SourceEvent::TitlesChanged));
        assert_eq!(sub.events.try_recv().ok(), Some(SourceEvent::FocusChanged));
    }

    #[test]
    fn unregister_stops_delivery() {
        let observer = SourceObserver::new();
        let id = Uuid::new_v4();
        let mut sub = observer.register(id);

        observer.unregister(id);
        observer.broadcast(SourceEvent::TitlesChanged);

        // Channel closed by unregister; nothing delivered.
        assert!(sub.events.try_recv().is_err());
        assert_eq!(observer.registration_count(), 0);
    }

    #[test]
    fn unregister_unknown_id_is_noop() {
        let observer = SourceObserver::new();
        let _sub = observer.register(Uuid::new_v4());

        observer.unregister(Uuid::new_v4());
        assert_eq!(observer.registration_count(), 1);
    }

    #[test]
    fn dropped_subscription_is_pruned_on_broadcast() {
        let observer = SourceObserver::new();
        let id = Uuid::new_v4();
        let sub = observer.register(id);
        let mut live = observer.register(Uuid::new_v4());
        drop(sub);

        observer.broadcast(SourceEvent::FocusChanged);

        assert_eq!(observer.registration_count(), 1);
        assert_eq!(live.events.try_recv().ok(), Some(SourceEvent::FocusChanged));
    }

    #[test]
    fn reregistering_replaces_channel() {
        let observer = SourceObserver::new();
        let id = Uuid::new_v4();
        let mut old = observer.register(id);
        let mut new = observer.register(id);

        observer.broadcast(SourceEvent::FocusChanged);

        assert_eq!(observer.registration_count(), 1);
        assert!(old.events.try_recv().is_err(), "old channel closed");
        assert_eq!(new.events.try_recv().ok(), Some(SourceEvent::FocusChanged));
    }
}
