use crate::errors::GlanceError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Screen capture permission has not been granted")]
    PermissionDenied,

    #[error("Failed to query source windows: {message}")]
    QueryFailed { message: String },
}

impl GlanceError for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::PermissionDenied => "CATALOG_PERMISSION_DENIED",
            CatalogError::QueryFailed { .. } => "CATALOG_QUERY_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        // Recoverable by the user granting access; QueryFailed is a
        // transient OS condition the caller should retry.
        matches!(self, CatalogError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_denied_display() {
        let error = CatalogError::PermissionDenied;
        assert_eq!(
            error.to_string(),
            "Screen capture permission has not been granted"
        );
        assert_eq!(error.error_code(), "CATALOG_PERMISSION_DENIED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_query_failed_display() {
        let error = CatalogError::QueryFailed {
            message: "display server unavailable".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to query source windows: display server unavailable"
        );
        assert_eq!(error.error_code(), "CATALOG_QUERY_FAILED");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CatalogError>();
    }
}
