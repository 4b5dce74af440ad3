//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success/Done:   green   (done status, no cycles found)
//!   - Active:         yellow  (in-progress, high priority)
//!   - Error/Blocked:  red     (blocked status, critical priority, cycles)
//!   - Reference:      cyan    (story IDs, tree root)
//!   - Muted:          dimmed  (field labels, connectors, backlog)
//!   - Emphasis:       bold    (section headers)

use crate::domain::{Priority, StoryStatus};
use colored::Colorize;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply color to status text based on story status.
pub(crate) fn colorize_status(status: StoryStatus, config: &OutputConfig) -> String {
    let text = status.to_string();
    if !config.use_colors {
        return text;
    }
    match status {
        StoryStatus::Backlog => text.dimmed().to_string(),
        StoryStatus::Todo => text.white().to_string(),
        StoryStatus::InProgress => text.yellow().to_string(),
        StoryStatus::Blocked => text.red().to_string(),
        StoryStatus::Done => text.green().to_string(),
    }
}

/// Apply color to priority text.
pub(crate) fn colorize_priority(priority: Priority, config: &OutputConfig) -> String {
    let text = format!("[{priority}]");
    if !config.use_colors {
        return text;
    }
    match priority {
        Priority::Critical => text.red().bold().to_string(),
        Priority::High => text.yellow().to_string(),
        Priority::Medium => text,
        Priority::Low => text.dimmed().to_string(),
    }
}

/// Colorize a story ID (cyan).
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return id.to_string();
    }
    id.cyan().to_string()
}

/// Get a colored status icon, with ASCII fallback support.
pub(crate) fn colored_status_icon(status: StoryStatus, config: &OutputConfig) -> String {
    let icon = if config.use_ascii {
        match status {
            StoryStatus::Backlog => ".",
            StoryStatus::Todo => "o",
            StoryStatus::InProgress => ">",
            StoryStatus::Blocked => "x",
            StoryStatus::Done => "+",
        }
    } else {
        match status {
            StoryStatus::Backlog => "·",
            StoryStatus::Todo => "○",
            StoryStatus::InProgress => "▶",
            StoryStatus::Blocked => "✗",
            StoryStatus::Done => "✓",
        }
    };

    if !config.use_colors {
        return icon.to_string();
    }

    match status {
        StoryStatus::Backlog => icon.dimmed().to_string(),
        StoryStatus::Todo => icon.white().to_string(),
        StoryStatus::InProgress => icon.yellow().to_string(),
        StoryStatus::Blocked => icon.red().to_string(),
        StoryStatus::Done => icon.green().to_string(),
    }
}

/// Apply dimmed style to text (for labels/field names).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Apply bold style to text (for section headers).
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use colored::control::set_override;
    use std::sync::{Mutex, MutexGuard};

    static GLOBAL_STATE_MUTEX: Mutex<()> = Mutex::new(());

    struct ColorGuard<'a> {
        _guard: MutexGuard<'a, ()>,
    }

    impl ColorGuard<'_> {
        fn new() -> Self {
            let guard = GLOBAL_STATE_MUTEX
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            set_override(true);
            Self { _guard: guard }
        }
    }

    impl Drop for ColorGuard<'_> {
        fn drop(&mut self) {
            set_override(false);
        }
    }

    fn with_colors_enabled<F, R>(f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ColorGuard::new();
        f()
    }

    #[test]
    fn test_colorize_status_contains_ansi_codes() {
        with_colors_enabled(|| {
            let config = OutputConfig::new(false, true);
            let in_progress = colorize_status(StoryStatus::InProgress, &config);
            let done = colorize_status(StoryStatus::Done, &config);

            assert!(in_progress.contains("in-progress"));
            assert!(done.contains("done"));
            assert!(in_progress.contains("\x1b["), "in-progress should have ANSI codes");
            assert!(done.contains("\x1b["), "done should have ANSI codes");
        });
    }

    #[test]
    fn test_colorize_status_without_colors() {
        let config = OutputConfig::new(false, false);
        assert_eq!(colorize_status(StoryStatus::Todo, &config), "todo");
        assert_eq!(colorize_status(StoryStatus::Blocked, &config), "blocked");
    }

    #[test]
    fn test_colorize_priority_without_colors() {
        let config = OutputConfig::new(false, false);
        assert_eq!(colorize_priority(Priority::Critical, &config), "[critical]");
        assert_eq!(colorize_priority(Priority::Low, &config), "[low]");
    }

    #[test]
    fn test_colorize_priority_medium_is_plain() {
        with_colors_enabled(|| {
            let config = OutputConfig::new(false, true);
            let critical = colorize_priority(Priority::Critical, &config);
            let medium = colorize_priority(Priority::Medium, &config);
            assert!(critical.contains("\x1b["), "critical should have ANSI codes");
            assert!(!medium.contains("\x1b["), "medium should not be styled");
        });
    }

    #[test]
    fn test_colorize_id_without_colors() {
        let config = OutputConfig::new(false, false);
        assert_eq!(colorize_id("S-123", &config), "S-123");
    }

    #[test]
    fn test_ascii_status_icons() {
        let config = OutputConfig::new(true, false);
        assert_eq!(colored_status_icon(StoryStatus::Todo, &config), "o");
        assert_eq!(colored_status_icon(StoryStatus::Done, &config), "+");
        assert_eq!(colored_status_icon(StoryStatus::Blocked, &config), "x");
    }

    #[test]
    fn test_unicode_status_icons() {
        let config = OutputConfig::new(false, false);
        assert_eq!(colored_status_icon(StoryStatus::Done, &config), "✓");
        assert_eq!(colored_status_icon(StoryStatus::InProgress, &config), "▶");
    }

    #[test]
    fn test_semantic_colors_without_colors() {
        let config = OutputConfig::new(false, false);
        assert_eq!(success("done", &config), "done");
        assert_eq!(error("fail", &config), "fail");
        assert_eq!(warning("caution", &config), "caution");
        assert_eq!(bold("Header", &config), "Header");
        assert_eq!(dimmed("label", &config), "label");
    }
}
