use uuid::Uuid;

use crate::errors::GlanceError;
use crate::platform::CaptureError;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No session with id {id}")]
    NotFound { id: Uuid },

    #[error("Session {id} has no source selected")]
    NoSourceSelected { id: Uuid },

    #[error(transparent)]
    Capture(#[from] CaptureError),
}

impl GlanceError for SessionError {
    fn error_code(&self) -> &'static str {
        match self {
            SessionError::NotFound { .. } => "SESSION_NOT_FOUND",
            SessionError::NoSourceSelected { .. } => "SESSION_NO_SOURCE_SELECTED",
            SessionError::Capture(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            SessionError::NotFound { .. } => false,
            SessionError::NoSourceSelected { .. } => true,
            SessionError::Capture(e) => e.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let id = Uuid::nil();
        let error = SessionError::NotFound { id };
        assert_eq!(
            error.to_string(),
            format!("No session with id {id}")
        );
        assert_eq!(error.error_code(), "SESSION_NOT_FOUND");
    }

    #[test]
    fn test_capture_error_passes_through_code() {
        let error = SessionError::Capture(CaptureError::PermissionDenied);
        assert_eq!(error.error_code(), "CAPTURE_PERMISSION_DENIED");
        assert!(error.is_user_error());
    }
}
