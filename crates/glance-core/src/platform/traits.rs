//! Platform collaborator traits.
//!
//! Core data structures never carry live platform handles; these
//! narrow seams return plain snapshots (`SourceWindowRef`,
//! `AppIdentity`) and opaque capture handles instead.

use crate::catalog::{CatalogError, SourceWindowRef};

use super::errors::CaptureError;
use super::types::{AppIdentity, CaptureHandle};

/// Window and focus queries against the platform.
pub trait SourceQuery: Send + Sync {
    /// Enumerate the current set of capturable windows.
    fn enumerate_windows(&self) -> Result<Vec<SourceWindowRef>, CatalogError>;

    /// Identify the frontmost (focused) application, if any.
    fn frontmost_application(&self) -> Result<Option<AppIdentity>, CatalogError>;
}

/// The external capture collaborator.
///
/// The streaming pipeline itself lives outside the core; the registry
/// only needs start/stop so it can uphold the one-handle-per-session
/// invariant.
pub trait CaptureProvider {
    /// Start capturing a source window.
    fn start(&mut self, source: &SourceWindowRef) -> Result<CaptureHandle, CaptureError>;

    /// Stop a capture stream. Best-effort: teardown failures are the
    /// provider's to log, not the caller's to handle.
    fn stop(&mut self, handle: CaptureHandle);
}
