//! RFC 3339 timestamp helpers for created/updated times.

use chrono::{DateTime, FixedOffset, Local, SecondsFormat, Utc};

/// The current time as an RFC 3339 UTC string with millisecond precision
/// (`2025-08-15T12:34:56.789Z`), the shape the blob has always stored.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_iso(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw.trim()).ok()
}

/// Formats a stored timestamp for display in local time. Input that does
/// not parse is returned unchanged instead of failing.
pub fn format_display(raw: &str, format: &str) -> String {
    match parse_iso(raw) {
        Some(dt) => dt.with_timezone(&Local).format(format).to_string(),
        None => raw.to_string(),
    }
}
