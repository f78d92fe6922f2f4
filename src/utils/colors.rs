/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Green for a non-zero counter, grey otherwise.
pub fn color_for_count(n: u32) -> &'static str {
    if n > 0 { GREEN } else { GREY }
}

/// Overtime gets the "warning" treatment once it is non-zero.
pub fn color_for_overtime(hours: f64) -> &'static str {
    if hours > 0.0 { YELLOW } else { GREY }
}
