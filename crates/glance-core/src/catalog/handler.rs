use tracing::info;

use crate::platform::SourceQuery;

use super::errors::CatalogError;
use super::types::{FilterRule, SourceGroup, SourceWindowRef};

/// List all capturable source windows.
///
/// Every call re-queries the platform: returned refs are snapshots and
/// go stale the moment the window set changes.
pub fn list_sources(query: &dyn SourceQuery) -> Result<Vec<SourceWindowRef>, CatalogError> {
    info!(event = "core.catalog.list_started");

    let sources = query.enumerate_windows()?;

    info!(event = "core.catalog.list_completed", count = sources.len());
    Ok(sources)
}

/// Apply a filter rule to a source snapshot. Pure; no side effects.
pub fn filter(sources: &[SourceWindowRef], rule: &FilterRule) -> Vec<SourceWindowRef> {
    sources
        .iter()
        .filter(|s| passes(rule, s))
        .cloned()
        .collect()
}

fn passes(rule: &FilterRule, source: &SourceWindowRef) -> bool {
    let listed = rule.apps.iter().any(|a| a == &source.app_name);
    if rule.is_blocklist { !listed } else { listed }
}

/// List sources with a filter rule applied.
pub fn list_filtered_sources(
    query: &dyn SourceQuery,
    rule: &FilterRule,
) -> Result<Vec<SourceWindowRef>, CatalogError> {
    let sources = list_sources(query)?;
    let filtered = filter(&sources, rule);

    info!(
        event = "core.catalog.filter_applied",
        rule = %rule.name,
        total = sources.len(),
        retained = filtered.len()
    );
    Ok(filtered)
}

/// Group sources by owning application, sorted by app name and by
/// title within each app.
///
/// The platform makes no ordering guarantee, so consumers that render
/// lists go through this helper to get reproducible output.
pub fn grouped(sources: &[SourceWindowRef]) -> Vec<SourceGroup> {
    let mut groups: Vec<SourceGroup> = Vec::new();

    for source in sources {
        match groups.iter_mut().find(|g| g.app_name == source.app_name) {
            Some(group) => group.windows.push(source.clone()),
            None => groups.push(SourceGroup {
                app_name: source.app_name.clone(),
                windows: vec![source.clone()],
            }),
        }
    }

    groups.sort_by(|a, b| a.app_name.cmp(&b.app_name));
    for group in &mut groups {
        group.windows.sort_by(|a, b| a.display_title().cmp(&b.display_title()));
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(app: &str, title: &str, pid: u32, wid: u32) -> SourceWindowRef {
        SourceWindowRef {
            process_id: pid,
            window_id: wid,
            title: Some(title.to_string()),
            app_name: app.to_string(),
        }
    }

    #[test]
    fn blocklist_excludes_listed_apps() {
        let sources = vec![
            source("Mail", "Inbox", 10, 1),
            source("Mail", "Inbox", 10, 2),
            source("Notes", "Draft", 20, 3),
        ];
        let rule = FilterRule::blocklist("test", vec!["Notes".to_string()]);

        let result = filter(&sources, &rule);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|s| s.app_name == "Mail"));
    }

    #[test]
    fn blocklist_match_is_case_sensitive() {
        let sources = vec![source("Mail", "Inbox", 10, 1)];
        let rule = FilterRule::blocklist("test", vec!["mail".to_string()]);

        // "mail" does not match "Mail" - the window passes.
        assert_eq!(filter(&sources, &rule).len(), 1);
    }

    #[test]
    fn empty_blocklist_passes_everything() {
        let sources = vec![source("Mail", "Inbox", 10, 1), source("Notes", "D", 20, 2)];
        let rule = FilterRule::blocklist("test", vec![]);

        assert_eq!(filter(&sources, &rule).len(), 2);
    }

    #[test]
    fn empty_allowlist_passes_nothing() {
        let sources = vec![source("Mail", "Inbox", 10, 1), source("Notes", "D", 20, 2)];
        let rule = FilterRule::allowlist("test", vec![]);

        assert!(filter(&sources, &rule).is_empty());
    }

    #[test]
    fn allowlist_keeps_only_listed_apps() {
        let sources = vec![
            source("Mail", "Inbox", 10, 1),
            source("Notes", "Draft", 20, 2),
            source("Terminal", "zsh", 30, 3),
        ];
        let rule = FilterRule::allowlist("test", vec!["Terminal".to_string()]);

        let result = filter(&sources, &rule);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].app_name, "Terminal");
    }

    #[test]
    fn filter_does_not_mutate_input() {
        let sources = vec![source("Mail", "Inbox", 10, 1)];
        let rule = FilterRule::allowlist("test", vec![]);

        let _ = filter(&sources, &rule);
        assert_eq!(sources.len(), 1);
    }

    #[test]
    fn grouped_sorts_apps_and_titles() {
        let sources = vec![
            source("Notes", "Draft", 20, 3),
            source("Mail", "Sent", 10, 2),
            source("Mail", "Inbox", 10, 1),
        ];

        let groups = grouped(&sources);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].app_name, "Mail");
        assert_eq!(groups[0].windows[0].title.as_deref(), Some("Inbox"));
        assert_eq!(groups[0].windows[1].title.as_deref(), Some("Sent"));
        assert_eq!(groups[1].app_name, "Notes");
    }
}
