//! Field-level normalization shared by the table loaders.
//!
//! Every coercion here maps invalid input to a neutral value (`None`, empty
//! list, empty string) instead of failing: the scoring layer treats missing
//! data as zero signal, never as an error.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::str::FromStr;

/// Lowercase and trim a categorical field.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a comma-separated multi-valued field (user interests), dropping
/// empty entries and normalizing each value.
pub fn split_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(normalize_label)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split a multi-valued field on any of comma, semicolon, pipe, or tab
/// (item keyword exports are inconsistent about their inner delimiter).
/// Runs of delimiters collapse; entries are trimmed and lowercased.
pub fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(|c| matches!(c, ',' | ';' | '|' | '\t'))
        .map(normalize_label)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Numeric coercion with invalid-to-missing semantics.
pub fn parse_number<T>(raw: &str) -> Option<T>
where
    T: FromStr,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

/// Timestamp coercion with invalid-to-missing semantics.
///
/// Accepts RFC 3339 and the bare `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DD` forms
/// the interaction exports use; anything else is `None`.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(ts.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }

    chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
