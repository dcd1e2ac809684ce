use serde::{Deserialize, Serialize};

/// A snapshot reference to one capturable OS window.
///
/// Identity is the `(process_id, window_id)` pair. The title is *not*
/// part of identity: it can change at any time while the window
/// persists, so callers must re-query the catalog instead of holding
/// on to a previously obtained reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceWindowRef {
    /// PID of the process that owns the window
    pub process_id: u32,
    /// Platform window identifier
    pub window_id: u32,
    /// Window title, if the window currently has one
    pub title: Option<String>,
    /// Name of the application that owns this window
    pub app_name: String,
}

impl SourceWindowRef {
    /// The stable identity of this window.
    pub fn identity(&self) -> (u32, u32) {
        (self.process_id, self.window_id)
    }

    /// Title suitable for display, falling back to the app name and
    /// finally the window id for untitled windows.
    pub fn display_title(&self) -> String {
        match &self.title {
            Some(t) if !t.is_empty() => t.clone(),
            _ if !self.app_name.is_empty() => self.app_name.clone(),
            _ => format!("[Window {}]", self.window_id),
        }
    }
}

/// A named allow/deny filter over application names.
///
/// Entries are case-sensitive exact application-name matches.
/// An empty blocklist passes everything; an empty allowlist passes
/// nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRule {
    /// Display name of the rule
    pub name: String,
    /// Application names this rule matches against
    pub apps: Vec<String>,
    /// Blocklist mode excludes listed apps; allowlist mode keeps only them
    pub is_blocklist: bool,
}

impl Default for FilterRule {
    fn default() -> Self {
        // Empty blocklist: everything passes.
        Self {
            name: "default".to_string(),
            apps: Vec::new(),
            is_blocklist: true,
        }
    }
}

impl FilterRule {
    pub fn blocklist(name: impl Into<String>, apps: Vec<String>) -> Self {
        Self {
            name: name.into(),
            apps,
            is_blocklist: true,
        }
    }

    pub fn allowlist(name: impl Into<String>, apps: Vec<String>) -> Self {
        Self {
            name: name.into(),
            apps,
            is_blocklist: false,
        }
    }
}

/// Sources grouped by owning application, for stable UI/CLI listings.
#[derive(Debug, Clone, Serialize)]
pub struct SourceGroup {
    pub app_name: String,
    pub windows: Vec<SourceWindowRef>,
}
