//! Normalizes raw user input: free text sanitation and tag parsing.

use once_cell::sync::Lazy;
use regex::Regex;

// C0 controls plus DEL, minus the whitespace formatting ones (\t \n \r).
static CONTROL_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x00-\x08\x0B\x0C\x0E-\x1F\x7F]").unwrap());

/// Strips control characters and trims surrounding whitespace. Tabs and
/// line breaks inside the text survive; everything else non-printable is
/// removed.
pub fn sanitize_text(raw: &str) -> String {
    CONTROL_CHARS.replace_all(raw, "").trim().to_string()
}

/// Splits comma separated tag input into normalized tags: trimmed,
/// lowercased, empty tokens dropped. Order and duplicates are kept as the
/// user typed them.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}
