use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

/// A distinct change observed in the platform window set.
///
/// Title changes carry no diff: the observer only tracks the
/// "something changed" edge, and consumers re-query the catalog for
/// the current title set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEvent {
    /// The frontmost application changed.
    FocusChanged,
    /// At least one known window's title changed (or windows
    /// appeared/disappeared).
    TitlesChanged,
}

/// A registered observer's receiving end.
///
/// Events are queued notifications: they are delivered in the order
/// the underlying changes occurred, and reading them never re-enters
/// the hub. Dropping the subscription without unregistering leaves a
/// dead registration behind that is cleaned up on the next delivery.
pub struct Subscription {
    pub id: Uuid,
    pub events: UnboundedReceiver<SourceEvent>,
}
