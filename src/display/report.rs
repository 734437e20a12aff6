//! Report formatting utilities for terminal output
//!
//! Provides the box banners, rules and number formats shared by the menu and
//! the summary reports.

/// Width of banners and rules
pub const REPORT_WIDTH: usize = 40;

/// Format a number with a fixed count of decimals
///
/// Exact ties round away from zero, so 0.125 shows as "0.13" at two places.
/// Plain `{:.2}` would round that tie to even.
pub fn format_decimal(value: f64, places: usize) -> String {
    let scale = 10f64.powi(places as i32);
    format!("{:.*}", places, (value * scale).round() / scale)
}

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{}%", format_decimal(pct, 1))
}

/// Format a share of a total as a percentage of that total
///
/// Returns 0.0 when the total is not positive.
pub fn percentage_of(part: f64, total: f64) -> f64 {
    if total <= 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

/// Center a title in a field of the given width
///
/// Odd padding puts the extra space on the left.
pub fn center(title: &str, width: usize) -> String {
    let len = title.chars().count();
    if len >= width {
        return title.to_string();
    }
    let total = width - len;
    let left = total - total / 2;
    format!("{}{}{}", " ".repeat(left), title, " ".repeat(total / 2))
}

/// Format a title inside a double-line box
pub fn format_banner(title: &str, width: usize) -> String {
    format!(
        "╔{rule}╗\n║{}║\n╚{rule}╝",
        center(title, width),
        rule = "═".repeat(width)
    )
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Left-align a label followed by a colon in a field of given width
pub fn label(name: &str, width: usize) -> String {
    format!("{:<width$}", format!("{}:", name), width = width)
}
