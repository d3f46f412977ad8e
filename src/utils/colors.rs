/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";
pub const BOLD: &str = "\x1b[1m";

/// Balance color: negative means hours still owed.
pub fn color_for_balance(value: &str) -> &'static str {
    if value.starts_with('-') { RED } else { GREEN }
}

/// Returns GREY for an empty or sentinel value, RESET otherwise.
pub fn color_for_optional_field(value: Option<&str>) -> &'static str {
    match value {
        Some(v) if !v.trim().is_empty() && v != "--:--" => RESET,
        _ => GREY,
    }
}

/// Wrap a value in a color and reset.
pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
