use tokio::sync::watch;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::observer::{SourceEvent, SourceObserver};
use crate::platform::SourceQuery;

use super::types::FocusState;

/// Maintains the process-wide [`FocusState`].
///
/// Holds one observer registration for the whole process; on every
/// focus edge it re-derives the state from a fresh frontmost query
/// rather than trusting any cached window data. Consumers read through
/// the watch receiver returned by [`FocusCoordinator::new`].
pub struct FocusCoordinator {
    observer_id: Uuid,
    own_app_name: String,
    tx: watch::Sender<FocusState>,
}

impl FocusCoordinator {
    pub fn new(own_app_name: impl Into<String>) -> (Self, watch::Receiver<FocusState>) {
        let (tx, rx) = watch::channel(FocusState::default());
        (
            Self {
                observer_id: Uuid::new_v4(),
                own_app_name: own_app_name.into(),
                tx,
            },
            rx,
        )
    }

    pub fn observer_id(&self) -> Uuid {
        self.observer_id
    }

    /// Re-derive focus state from the platform and publish it.
    ///
    /// A failed query keeps the previous state: a transient error is
    /// not evidence that focus moved.
    pub fn refresh(&self, query: &dyn SourceQuery) -> FocusState {
        let frontmost = match query.frontmost_application() {
            Ok(app) => app,
            Err(e) => {
                warn!(event = "core.focus.refresh_failed", error = %e);
                return self.tx.borrow().clone();
            }
        };

        let state = match frontmost {
            Some(app) => {
                let is_own = app.process_id == std::process::id()
                    || app.app_name == self.own_app_name;
                FocusState {
                    focused_process_id: Some(app.process_id),
                    focused_app: Some(app.app_name),
                    is_own_app_focused: is_own,
                }
            }
            None => FocusState::default(),
        };

        if *self.tx.borrow() != state {
            debug!(
                event = "core.focus.state_changed",
                focused_pid = ?state.focused_process_id,
                own_app = state.is_own_app_focused
            );
            self.tx.send_replace(state.clone());
        }
        state
    }

    /// Subscribe to the hub and keep the focus state current until the
    /// hub goes away or this registration is unregistered.
    ///
    /// Title edges are ignored here - a title change never moves focus.
    pub async fn run<Q: SourceQuery>(self, observer: SourceObserver, query: Q) {
        let mut subscription = observer.register(self.observer_id);

        // Establish the initial state; startup itself is not an edge.
        self.refresh(&query);

        while let Some(event) = subscription.events.recv().await {
            if event == SourceEvent::FocusChanged {
                self.refresh(&query);
            }
        }

        debug!(event = "core.focus.coordinator_stopped", observer_id = %self.observer_id);
    }
}
