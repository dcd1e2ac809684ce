//! Settings persistence.
//!
//! Settings live in `~/.glance/settings.json`. A missing file yields
//! defaults; a corrupted file yields defaults plus a `load_error` the
//! UI can surface. Loading never panics and never fails the caller.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use glance_core::catalog::FilterRule;
use glance_core::hotkey::{self, HotkeyBinding};

use super::errors::ConfigError;

/// Persisted user settings: the source filter and the hotkey bindings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub filter: FilterRule,
    #[serde(default)]
    pub bindings: Vec<HotkeyBinding>,
    /// Set when the settings file existed but could not be used.
    #[serde(skip)]
    pub load_error: Option<String>,
}

/// Path to the settings file.
///
/// Falls back to `./.glance/settings.json` if the home directory
/// cannot be determined.
pub fn settings_file_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".glance")
        .join("settings.json")
}

/// Load settings from the default location.
pub fn load_settings() -> Settings {
    load_settings_from(&settings_file_path())
}

pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(
                    event = "config.settings.parse_failed",
                    path = %path.display(),
                    error = %e,
                    "Settings file exists but contains invalid JSON - using defaults"
                );
                Settings {
                    load_error: Some(format!(
                        "Settings file corrupted ({}). Delete {} to reset.",
                        e,
                        path.display()
                    )),
                    ..Default::default()
                }
            }
        },
        Err(e) => {
            tracing::error!(
                event = "config.settings.load_failed",
                path = %path.display(),
                error = %e
            );
            Settings {
                load_error: Some(format!(
                    "Failed to read settings file: {}. Check permissions on {}",
                    e,
                    path.display()
                )),
                ..Default::default()
            }
        }
    }
}

/// Save settings to the default location.
///
/// Bindings are validated first: an invalid or internally conflicting
/// binding set is rejected outright and nothing is written.
pub fn save_settings(settings: &Settings) -> Result<(), ConfigError> {
    save_settings_to(&settings_file_path(), settings)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), ConfigError> {
    validate_bindings(&settings.bindings)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::SaveFailed {
            message: format!("Failed to create directory ({}): {}", parent.display(), e),
        })?;
    }

    let json = serde_json::to_string_pretty(settings).map_err(|e| ConfigError::SaveFailed {
        message: format!("Failed to serialize settings: {}", e),
    })?;

    std::fs::write(path, json).map_err(|e| ConfigError::SaveFailed {
        message: format!("Failed to write settings file ({}): {}", path.display(), e),
    })?;

    tracing::info!(
        event = "config.settings.saved",
        path = %path.display(),
        binding_count = settings.bindings.len()
    );
    Ok(())
}

fn validate_bindings(bindings: &[HotkeyBinding]) -> Result<(), ConfigError> {
    for (i, binding) in bindings.iter().enumerate() {
        hotkey::validate(binding).map_err(|e| ConfigError::InvalidBindings {
            message: e.to_string(),
        })?;

        if hotkey::conflicts(&bindings[..i], binding) {
            return Err(ConfigError::InvalidBindings {
                message: format!("duplicate chord {}", binding.chord_label()),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use glance_core::hotkey::Modifier;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from(&dir.path().join("settings.json"));

        assert!(settings.filter.is_blocklist);
        assert!(settings.bindings.is_empty());
        assert!(settings.load_error.is_none());
    }

    #[test]
    fn corrupted_file_yields_defaults_with_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let settings = load_settings_from(&path);
        assert!(settings.bindings.is_empty());
        assert!(settings.load_error.is_some());
    }

    #[test]
    fn settings_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            filter: FilterRule::blocklist("work", vec!["Notes".to_string()]),
            bindings: vec![HotkeyBinding::new(40, [Modifier::Command], "Inbox")],
            load_error: None,
        };

        save_settings_to(&path, &settings).unwrap();
        let loaded = load_settings_from(&path);

        assert_eq!(loaded.filter, settings.filter);
        assert_eq!(loaded.bindings, settings.bindings);
    }

    #[test]
    fn save_rejects_invalid_binding() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            bindings: vec![HotkeyBinding::new(40, [], "Inbox")],
            ..Default::default()
        };

        let result = save_settings_to(&path, &settings);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBindings { .. })
        ));
        assert!(!path.exists(), "nothing written on rejection");
    }

    #[test]
    fn save_rejects_conflicting_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = Settings {
            bindings: vec![
                HotkeyBinding::new(40, [Modifier::Command], "Inbox"),
                HotkeyBinding::new(40, [Modifier::Command], "Draft"),
            ],
            ..Default::default()
        };

        let result = save_settings_to(&path, &settings);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidBindings { .. })
        ));
    }
}
