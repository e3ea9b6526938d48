//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Truncate to `max` characters (not bytes), appending an ellipsis when the
/// input was longer. Safe on multi-byte content.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max).collect();
    format!("{}...", cut)
}

/// Render an optional timestamp-ish field, `--` when absent.
pub fn display_or_dashes(value: Option<String>) -> String {
    value.unwrap_or_else(|| "--".to_string())
}
