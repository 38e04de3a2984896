//! Formatting helpers shared by the renderers.

use chrono::{DateTime, Utc};

/// Format a release or due date as "Tue, Oct 20".
pub fn format_release_date(ts: DateTime<Utc>) -> String {
    ts.format("%a, %b %-d").to_string()
}

/// Format a segment or shot length ("18s").
pub fn format_seconds(seconds: u32) -> String {
    format!("{}s", seconds)
}

/// Join hashtags for display.
pub fn format_hashtags(tags: &[String]) -> String {
    tags.join(" · ")
}
