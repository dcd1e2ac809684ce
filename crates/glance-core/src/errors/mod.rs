use std::error::Error;

/// Base trait for all glance application errors
pub trait GlanceError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

/// Common result type for the application
pub type GlanceResult<T> = Result<T, Box<dyn GlanceError>>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glance_result() {
        let _result: GlanceResult<i32> = Ok(42);
    }
}
