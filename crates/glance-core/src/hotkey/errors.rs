use crate::errors::GlanceError;

#[derive(Debug, thiserror::Error)]
pub enum HotkeyError {
    #[error("Invalid binding for '{target_title}': {reason}")]
    InvalidBinding { target_title: String, reason: String },

    #[error("Binding conflicts with existing chord {chord}")]
    ConflictingBinding { chord: String },
}

impl GlanceError for HotkeyError {
    fn error_code(&self) -> &'static str {
        match self {
            HotkeyError::InvalidBinding { .. } => "HOTKEY_INVALID_BINDING",
            HotkeyError::ConflictingBinding { .. } => "HOTKEY_CONFLICTING_BINDING",
        }
    }

    fn is_user_error(&self) -> bool {
        // Both are rejected at validation time and fixable by the user.
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_binding_display() {
        let error = HotkeyError::InvalidBinding {
            target_title: "Inbox".to_string(),
            reason: "no modifier keys".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid binding for 'Inbox': no modifier keys"
        );
        assert_eq!(error.error_code(), "HOTKEY_INVALID_BINDING");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_conflicting_binding_display() {
        let error = HotkeyError::ConflictingBinding {
            chord: "\u{2318}K".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Binding conflicts with existing chord \u{2318}K"
        );
        assert_eq!(error.error_code(), "HOTKEY_CONFLICTING_BINDING");
    }
}
