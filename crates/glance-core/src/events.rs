//! Application-level event logging helpers shared by CLI and tests.

use tracing::{error, info, warn};

use crate::errors::GlanceError;

/// Log application startup with version info
pub fn log_app_startup() {
    info!(
        event = "app.startup",
        version = env!("CARGO_PKG_VERSION"),
        os = std::env::consts::OS
    );
}

/// Log an application error at the appropriate level.
///
/// User errors (stale bindings, missing permission) are warnings;
/// everything else is an error.
pub fn log_app_error(e: &dyn GlanceError) {
    if e.is_user_error() {
        warn!(event = "app.user_error", code = e.error_code(), error = %e);
    } else {
        error!(event = "app.error", code = e.error_code(), error = %e);
    }
}
