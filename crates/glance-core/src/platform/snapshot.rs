use tracing::{debug, info};

use crate::catalog::SourceWindowRef;

use super::errors::CaptureError;
use super::traits::CaptureProvider;
use super::types::CaptureHandle;

/// Minimal xcap-backed capture provider.
///
/// Grabs one frame at start to verify the source still exists and the
/// capture permission holds, then hands out a handle. The continuous
/// streaming pipeline is a separate collaborator; this provider exists
/// so the registry and CLI have a real implementation to run against.
pub struct SnapshotCaptureProvider;

impl CaptureProvider for SnapshotCaptureProvider {
    fn start(&mut self, source: &SourceWindowRef) -> Result<CaptureHandle, CaptureError> {
        info!(
            event = "core.capture.start_requested",
            process_id = source.process_id,
            window_id = source.window_id
        );

        let windows = xcap::Window::all().map_err(|e| {
            let message = e.to_string();
            if message.contains("permission") || message.contains("denied") {
                CaptureError::PermissionDenied
            } else {
                CaptureError::CaptureFailed { message }
            }
        })?;

        // Re-locate by identity - the snapshot the caller holds may be stale.
        let window = windows
            .into_iter()
            .find(|w| {
                w.pid().ok() == Some(source.process_id) && w.id().ok() == Some(source.window_id)
            })
            .ok_or_else(|| CaptureError::SourceUnavailable {
                title: source.display_title(),
            })?;

        window
            .capture_image()
            .map_err(|e| CaptureError::CaptureFailed {
                message: e.to_string(),
            })?;

        let handle = CaptureHandle::new(source.clone());
        info!(
            event = "core.capture.started",
            handle_id = %handle.id(),
            window_id = source.window_id
        );
        Ok(handle)
    }

    fn stop(&mut self, handle: CaptureHandle) {
        // Nothing to tear down for single-frame grabs.
        debug!(
            event = "core.capture.stopped",
            handle_id = %handle.id(),
            window_id = handle.source().window_id
        );
    }
}
