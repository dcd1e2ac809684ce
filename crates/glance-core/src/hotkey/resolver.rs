use tracing::{debug, info, warn};

use crate::catalog::SourceWindowRef;

use super::errors::HotkeyError;
use super::types::{HotkeyBinding, Resolution};

/// Validate a binding. A binding without modifiers cannot be active:
/// a bare key grab would swallow ordinary typing.
pub fn validate(binding: &HotkeyBinding) -> Result<(), HotkeyError> {
    if binding.modifiers.is_empty() {
        return Err(HotkeyError::InvalidBinding {
            target_title: binding.target_title.clone(),
            reason: "no modifier keys".to_string(),
        });
    }
    Ok(())
}

/// Whether the candidate's chord collides with any existing binding.
///
/// Target titles are irrelevant here: the chord namespace is global,
/// so two bindings for different windows still conflict when their
/// `(key_code, modifiers)` match.
pub fn conflicts(existing: &[HotkeyBinding], candidate: &HotkeyBinding) -> bool {
    existing.iter().any(|b| b.same_chord(candidate))
}

/// Validate a candidate against the stored set, rejecting both invalid
/// and conflicting bindings so neither is ever persisted.
pub fn check_binding(existing: &[HotkeyBinding], candidate: &HotkeyBinding) -> Result<(), HotkeyError> {
    validate(candidate)?;
    if conflicts(existing, candidate) {
        return Err(HotkeyError::ConflictingBinding {
            chord: candidate.chord_label(),
        });
    }
    Ok(())
}

/// Resolve a binding activation against a catalog snapshot.
///
/// Exact title match. Duplicate titles are surfaced as `Ambiguous`
/// rather than silently picking one: focusing or capturing the wrong
/// window is worse than asking the user to disambiguate. Zero matches
/// means the binding went stale and activation is a logged no-op.
pub fn resolve(binding: &HotkeyBinding, catalog: &[SourceWindowRef]) -> Resolution {
    let mut matches = catalog
        .iter()
        .filter(|w| w.title.as_deref() == Some(binding.target_title.as_str()));

    let Some(first) = matches.next() else {
        info!(
            event = "core.hotkey.resolve_not_found",
            target_title = %binding.target_title
        );
        return Resolution::NotFound;
    };

    let rest = matches.count();
    if rest > 0 {
        warn!(
            event = "core.hotkey.resolve_ambiguous",
            target_title = %binding.target_title,
            matches = rest + 1
        );
        return Resolution::Ambiguous(rest + 1);
    }

    debug!(
        event = "core.hotkey.resolved",
        target_title = %binding.target_title,
        process_id = first.process_id,
        window_id = first.window_id
    );
    Resolution::Resolved(first.clone())
}

#[cfg(test)]
mod tests {
    use crate::hotkey::types::Modifier;

    use super::*;

    fn window(title: &str, pid: u32, wid: u32) -> SourceWindowRef {
        SourceWindowRef {
            process_id: pid,
            window_id: wid,
            title: Some(title.to_string()),
            app_name: "App".to_string(),
        }
    }

    #[test]
    fn empty_modifiers_is_invalid() {
        let binding = HotkeyBinding::new(1, [], "Inbox");
        let result = validate(&binding);
        assert!(matches!(result, Err(HotkeyError::InvalidBinding { .. })));
    }

    #[test]
    fn single_modifier_is_valid() {
        let binding = HotkeyBinding::new(1, [Modifier::Command], "Inbox");
        assert!(validate(&binding).is_ok());
    }

    #[test]
    fn conflict_ignores_target_title() {
        let existing = vec![HotkeyBinding::new(40, [Modifier::Command], "Inbox")];
        let candidate = HotkeyBinding::new(40, [Modifier::Command], "Completely Different");
        assert!(conflicts(&existing, &candidate));
    }

    #[test]
    fn conflict_is_symmetric() {
        let a = HotkeyBinding::new(40, [Modifier::Command, Modifier::Shift], "A");
        let b = HotkeyBinding::new(40, [Modifier::Shift, Modifier::Command], "B");
        assert!(conflicts(std::slice::from_ref(&a), &b));
        assert!(conflicts(std::slice::from_ref(&b), &a));
    }

    #[test]
    fn different_modifiers_do_not_conflict() {
        let existing = vec![HotkeyBinding::new(40, [Modifier::Command], "Inbox")];
        let candidate = HotkeyBinding::new(40, [Modifier::Option], "Inbox");
        assert!(!conflicts(&existing, &candidate));
    }

    #[test]
    fn check_binding_rejects_conflict_with_chord_label() {
        let existing = vec![HotkeyBinding::new(40, [Modifier::Command], "Inbox")];
        let candidate = HotkeyBinding::new(40, [Modifier::Command], "Other");

        let err = check_binding(&existing, &candidate).unwrap_err();
        assert!(matches!(err, HotkeyError::ConflictingBinding { .. }));
    }

    #[test]
    fn resolve_single_match() {
        let catalog = vec![window("Inbox", 10, 1), window("Draft", 20, 2)];
        let binding = HotkeyBinding::new(1, [Modifier::Command], "Inbox");

        match resolve(&binding, &catalog) {
            Resolution::Resolved(w) => assert_eq!(w.identity(), (10, 1)),
            other => panic!("expected Resolved, got {other:?}"),
        }
    }

    #[test]
    fn resolve_duplicate_titles_is_ambiguous() {
        let catalog = vec![
            window("Inbox", 10, 1),
            window("Inbox", 11, 2),
            window("Draft", 20, 3),
        ];
        let binding = HotkeyBinding::new(1, [Modifier::Command], "Inbox");

        assert_eq!(resolve(&binding, &catalog), Resolution::Ambiguous(2));
    }

    #[test]
    fn resolve_missing_title_is_not_found() {
        let catalog = vec![window("Draft", 20, 3)];
        let binding = HotkeyBinding::new(1, [Modifier::Command], "Inbox");

        assert_eq!(resolve(&binding, &catalog), Resolution::NotFound);
    }

    #[test]
    fn resolve_match_is_exact_not_substring() {
        let catalog = vec![window("Inbox - Mail", 10, 1)];
        let binding = HotkeyBinding::new(1, [Modifier::Command], "Inbox");

        assert_eq!(resolve(&binding, &catalog), Resolution::NotFound);
    }

    #[test]
    fn resolve_ignores_untitled_windows() {
        let catalog = vec![SourceWindowRef {
            process_id: 10,
            window_id: 1,
            title: None,
            app_name: "App".to_string(),
        }];
        let binding = HotkeyBinding::new(1, [Modifier::Command], "Inbox");

        assert_eq!(resolve(&binding, &catalog), Resolution::NotFound);
    }
}
