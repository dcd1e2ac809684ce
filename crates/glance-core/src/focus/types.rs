use serde::Serialize;

/// Process-wide focus snapshot.
///
/// Written only by the `FocusCoordinator`; everyone else holds a read
/// side of the watch channel. Sessions compare their selected source's
/// `process_id` against `focused_process_id` - pid comparison, not
/// title matching, because titles can collide and pids cannot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FocusState {
    /// PID of the frontmost application's process, if known.
    pub focused_process_id: Option<u32>,
    /// Name of the frontmost application, if known.
    pub focused_app: Option<String>,
    /// Whether this application itself is frontmost.
    pub is_own_app_focused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_has_no_focus() {
        let state = FocusState::default();
        assert_eq!(state.focused_process_id, None);
        assert_eq!(state.focused_app, None);
        assert!(!state.is_own_app_focused);
    }
}
