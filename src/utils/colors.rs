/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

/// Imported rows carry this placeholder for missing cells.
pub const NO_DATA: &str = "-no data-";

/// Returns the value dimmed when it is empty or the import placeholder.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == NO_DATA {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
