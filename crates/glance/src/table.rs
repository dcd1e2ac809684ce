use glance_core::catalog::SourceGroup;
use glance_core::hotkey::HotkeyBinding;

/// Print a formatted table of sources, one row per window, grouped by
/// application (the group name is shown only on its first row).
pub fn print_sources_table(groups: &[SourceGroup]) {
    let app_width = groups
        .iter()
        .map(|g| g.app_name.chars().count())
        .max()
        .unwrap_or(3)
        .clamp(3, 20);
    let title_width = groups
        .iter()
        .flat_map(|g| g.windows.iter())
        .map(|w| w.display_title().chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 40);
    let pid_width = 7;
    let window_width = 8;

    println!(
        "┌{}┬{}┬{}┬{}┐",
        "─".repeat(app_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(pid_width + 2),
        "─".repeat(window_width + 2),
    );
    println!(
        "│ {:<app_width$} │ {:<title_width$} │ {:<pid_width$} │ {:<window_width$} │",
        "App", "Title", "PID", "Window",
    );
    println!(
        "├{}┼{}┼{}┼{}┤",
        "─".repeat(app_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(pid_width + 2),
        "─".repeat(window_width + 2),
    );

    for group in groups {
        for (i, window) in group.windows.iter().enumerate() {
            let app = if i == 0 { group.app_name.as_str() } else { "" };
            let title = truncate(&window.display_title(), title_width);
            println!(
                "│ {:<app_width$} │ {:<title_width$} │ {:<pid_width$} │ {:<window_width$} │",
                truncate(app, app_width),
                title,
                window.process_id,
                window.window_id,
            );
        }
    }

    println!(
        "└{}┴{}┴{}┴{}┘",
        "─".repeat(app_width + 2),
        "─".repeat(title_width + 2),
        "─".repeat(pid_width + 2),
        "─".repeat(window_width + 2),
    );
}

/// Print a formatted table of hotkey bindings.
pub fn print_bindings_table(bindings: &[HotkeyBinding]) {
    let chord_width = bindings
        .iter()
        .map(|b| b.chord_label().chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 16);
    let target_width = bindings
        .iter()
        .map(|b| b.target_title.chars().count())
        .max()
        .unwrap_or(6)
        .clamp(6, 40);

    println!(
        "┌{}┬{}┐",
        "─".repeat(chord_width + 2),
        "─".repeat(target_width + 2),
    );
    println!(
        "│ {:<chord_width$} │ {:<target_width$} │",
        "Chord", "Target",
    );
    println!(
        "├{}┼{}┤",
        "─".repeat(chord_width + 2),
        "─".repeat(target_width + 2),
    );

    for binding in bindings {
        println!(
            "│ {:<chord_width$} │ {:<target_width$} │",
            truncate(&binding.chord_label(), chord_width),
            truncate(&binding.target_title, target_width),
        );
    }

    println!(
        "└{}┴{}┘",
        "─".repeat(chord_width + 2),
        "─".repeat(target_width + 2),
    );
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_string_unchanged() {
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn truncate_long_string_adds_ellipsis() {
        let result = truncate("abcdefghij", 5);
        assert_eq!(result.chars().count(), 5);
        assert!(result.ends_with('…'));
    }
}
