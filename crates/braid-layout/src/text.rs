//! Label text helpers shared by layout, tooltips, and reports

use chrono::{DateTime, Utc};

/// Maximum title length before truncation
pub const TITLE_MAX_LEN: usize = 50;

/// Truncate an event title for its node label
///
/// Titles longer than 50 characters are cut to 47 plus an ellipsis.
/// Counts characters, not bytes, so multi-byte titles never split
/// mid-codepoint.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_LEN {
        let cut: String = title.chars().take(TITLE_MAX_LEN - 3).collect();
        format!("{}...", cut)
    } else {
        title.to_string()
    }
}

/// Format a timestamp for tooltips and report rows, e.g.
/// "Mar 1, 2024, 8:30 AM"
pub fn format_date_time(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %-I:%M %p").to_string()
}

/// Date line of an axis label, e.g. "Mar 1, 2024"
pub fn format_date_label(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Time line of an axis label, e.g. "8:30 AM"
pub fn format_time_label(date: &DateTime<Utc>) -> String {
    date.format("%-I:%M %p").to_string()
}
