use std::collections::HashMap;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::SourceWindowRef;
use crate::focus::FocusState;
use crate::platform::CaptureProvider;

use super::errors::SessionError;
use super::types::{Session, SessionPhase, SessionView};

/// The single mutation point for "which sessions exist".
///
/// Sessions are an id-keyed arena: callers hold `Uuid`s, never session
/// references. Capture handles live inside their session record, so a
/// handle can never outlive its session and no session ever holds two.
pub struct SessionRegistry {
    sessions: HashMap<Uuid, Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Allocate a new empty session. Never fails.
    pub fn create(&mut self) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(id, Session::new(id));

        info!(
            event = "core.sessions.created",
            session_id = %id,
            session_count = self.sessions.len()
        );
        id
    }

    /// Destroy a session, releasing its capture handle if one is live.
    ///
    /// Removing an absent id is a warning-logged no-op, mirroring
    /// idempotent-delete semantics: the caller's intent is already
    /// satisfied. Once this returns, the session is gone as a callback
    /// target even if the provider's teardown completes later.
    pub fn remove(&mut self, id: Uuid, capture: &mut dyn CaptureProvider) {
        let Some(mut session) = self.sessions.remove(&id) else {
            warn!(event = "core.sessions.remove_unknown", session_id = %id);
            return;
        };

        session.phase = SessionPhase::Stopped;
        if let Some(handle) = session.capture_handle.take() {
            capture.stop(handle);
        }

        info!(
            event = "core.sessions.removed",
            session_id = %id,
            session_count = self.sessions.len()
        );
    }

    /// Read one session's state.
    pub fn get(&self, id: Uuid) -> Option<SessionView> {
        self.sessions.get(&id).map(Session::view)
    }

    /// Snapshot of all sessions, ordered by id for stable output.
    pub fn views(&self) -> Vec<SessionView> {
        let mut views: Vec<SessionView> = self.sessions.values().map(Session::view).collect();
        views.sort_by_key(|v| v.id);
        views
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Select (or switch) the session's source.
    ///
    /// Switching while capturing releases the current handle first;
    /// the session drops back to `SelectingSource` and the caller
    /// decides when to start capturing the new source.
    pub fn select_source(
        &mut self,
        id: Uuid,
        source: SourceWindowRef,
        capture: &mut dyn CaptureProvider,
    ) -> Result<(), SessionError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound { id })?;

        if let Some(handle) = session.capture_handle.take() {
            debug!(
                event = "core.sessions.capture_released_for_switch",
                session_id = %id,
                old_window_id = handle.source().window_id
            );
            capture.stop(handle);
        }

        info!(
            event = "core.sessions.source_selected",
            session_id = %id,
            process_id = source.process_id,
            window_id = source.window_id
        );

        session.display_title = Some(source.display_title());
        session.selected_source = Some(source);
        session.phase = SessionPhase::SelectingSource;
        Ok(())
    }

    /// Hand the selected source to the capture collaborator.
    ///
    /// On failure the error is recorded in the session's state and the
    /// session returns to source selection - capture errors surface
    /// through the view, never silently.
    pub fn start_capture(
        &mut self,
        id: Uuid,
        capture: &mut dyn CaptureProvider,
    ) -> Result<(), SessionError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound { id })?;

        let source = session
            .selected_source
            .clone()
            .ok_or(SessionError::NoSourceSelected { id })?;

        // A stale handle would violate the one-handle invariant; stop
        // it before asking for a new one.
        if let Some(handle) = session.capture_handle.take() {
            capture.stop(handle);
        }

        match capture.start(&source) {
            Ok(handle) => {
                info!(
                    event = "core.sessions.capture_started",
                    session_id = %id,
                    handle_id = %handle.id()
                );
                session.capture_handle = Some(handle);
                session.phase = SessionPhase::Capturing;
                session.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(
                    event = "core.sessions.capture_start_failed",
                    session_id = %id,
                    error = %e
                );
                session.last_error = Some(e.to_string());
                session.phase = SessionPhase::SelectingSource;
                Err(SessionError::Capture(e))
            }
        }
    }

    /// Stop capturing and return to source selection.
    pub fn stop_capture(
        &mut self,
        id: Uuid,
        capture: &mut dyn CaptureProvider,
    ) -> Result<(), SessionError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound { id })?;

        if let Some(handle) = session.capture_handle.take() {
            info!(
                event = "core.sessions.capture_stopped",
                session_id = %id,
                handle_id = %handle.id()
            );
            capture.stop(handle);
        }
        session.phase = SessionPhase::SelectingSource;
        Ok(())
    }

    /// Update every session's focus indicator from the current focus
    /// state. Pid comparison against the selected source - titles can
    /// collide, pids cannot.
    pub fn apply_focus(&mut self, focus: &FocusState) {
        for session in self.sessions.values_mut() {
            session.is_focused = match (&session.selected_source, focus.focused_process_id) {
                (Some(source), Some(pid)) => source.process_id == pid,
                _ => false,
            };
        }
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
