use crate::errors::GlanceError;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("Screen capture permission has not been granted")]
    PermissionDenied,

    #[error("Source window is no longer available: '{title}'")]
    SourceUnavailable { title: String },

    #[error("Capture failed: {message}")]
    CaptureFailed { message: String },
}

impl GlanceError for CaptureError {
    fn error_code(&self) -> &'static str {
        match self {
            CaptureError::PermissionDenied => "CAPTURE_PERMISSION_DENIED",
            CaptureError::SourceUnavailable { .. } => "CAPTURE_SOURCE_UNAVAILABLE",
            CaptureError::CaptureFailed { .. } => "CAPTURE_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            CaptureError::PermissionDenied | CaptureError::SourceUnavailable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_display() {
        let error = CaptureError::SourceUnavailable {
            title: "Inbox".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Source window is no longer available: 'Inbox'"
        );
        assert_eq!(error.error_code(), "CAPTURE_SOURCE_UNAVAILABLE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_capture_failed_display() {
        let error = CaptureError::CaptureFailed {
            message: "stream interrupted".to_string(),
        };
        assert_eq!(error.to_string(), "Capture failed: stream interrupted");
        assert_eq!(error.error_code(), "CAPTURE_FAILED");
        assert!(!error.is_user_error());
    }
}
