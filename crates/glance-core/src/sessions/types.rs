use serde::Serialize;
use uuid::Uuid;

use crate::catalog::SourceWindowRef;
use crate::platform::CaptureHandle;

/// Linear session lifecycle. A capture failure or explicit stop drops
/// a session back to `SelectingSource`; `Stopped` is only reached on
/// teardown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Created,
    SelectingSource,
    Capturing,
    Stopped,
}

/// One preview session. Owned exclusively by the registry: external
/// callers hold only the id and read state through [`SessionView`],
/// so a removed session can never dangle.
#[derive(Debug)]
pub(crate) struct Session {
    pub id: Uuid,
    pub phase: SessionPhase,
    pub selected_source: Option<SourceWindowRef>,
    pub capture_handle: Option<CaptureHandle>,
    pub is_focused: bool,
    pub display_title: Option<String>,
    pub last_error: Option<String>,
}

impl Session {
    pub(crate) fn new(id: Uuid) -> Self {
        Self {
            id,
            phase: SessionPhase::Created,
            selected_source: None,
            capture_handle: None,
            is_focused: false,
            display_title: None,
            last_error: None,
        }
    }

    pub(crate) fn view(&self) -> SessionView {
        SessionView {
            id: self.id,
            phase: self.phase,
            selected_source: self.selected_source.clone(),
            is_capturing: self.capture_handle.is_some(),
            is_focused: self.is_focused,
            display_title: self.display_title.clone(),
            last_error: self.last_error.clone(),
        }
    }
}

/// Read-only snapshot of a session's state, for UI rendering.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub phase: SessionPhase,
    pub selected_source: Option<SourceWindowRef>,
    pub is_capturing: bool,
    pub is_focused: bool,
    pub display_title: Option<String>,
    pub last_error: Option<String>,
}
