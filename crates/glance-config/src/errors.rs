use std::error::Error;

use glance_core::errors::GlanceError;

#[derive(Debug)]
pub enum ConfigError {
    SettingsParseError {
        message: String,
    },
    InvalidBindings {
        message: String,
    },
    SaveFailed {
        message: String,
    },
    IoError {
        source: std::io::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::SettingsParseError { message } => {
                write!(f, "Failed to parse settings file: {}", message)
            }
            ConfigError::InvalidBindings { message } => {
                write!(f, "Refusing to save bindings: {}", message)
            }
            ConfigError::SaveFailed { message } => {
                write!(f, "Failed to save settings: {}", message)
            }
            ConfigError::IoError { source } => {
                write!(f, "IO error reading settings: {}", source)
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::IoError { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(source: std::io::Error) -> Self {
        ConfigError::IoError { source }
    }
}

impl GlanceError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::SettingsParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidBindings { .. } => "CONFIG_INVALID_BINDINGS",
            ConfigError::SaveFailed { .. } => "CONFIG_SAVE_FAILED",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConfigError::SettingsParseError { .. } | ConfigError::InvalidBindings { .. }
        )
    }
}
