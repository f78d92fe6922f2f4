//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width, counting wide characters correctly.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// Overtime hours for table cells: "1.5h", or "-" when zero.
pub fn hours_cell(h: f64) -> String {
    if h > 0.0 {
        format!("{:.1}h", h)
    } else {
        "-".to_string()
    }
}
