//! Lenient feed timestamp parsing.
//!
//! Feeds in the wild mix RFC 2822, RFC 3339 and assorted ISO-ish layouts.
//! Anything carrying an explicit offset is converted to UTC; a timestamp with
//! no timezone at all is taken to already be UTC. Text that matches none of
//! the known layouts yields `None` so the entry is treated as undated.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M:%S %z",
    "%d %b %Y %H:%M:%S %z",
    "%d %b %Y %H:%M %z",
    "%d %B %Y %H:%M:%S %z",
    "%d %B %Y %H:%M %z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M",
    "%d %B %Y %H:%M:%S",
    "%d %B %Y %H:%M",
];

/// Zone names chrono's RFC 2822 parser does not accept on its own.
const UTC_ZONE_NAMES: &[&str] = &["UTC", "UT", "GMT", "Z"];

pub fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    let text = normalize_zone(strip_weekday(text));

    if let Ok(dt) = DateTime::parse_from_rfc2822(&text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&text, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    // No timezone: assume UTC.
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(&text, format) {
            return Some(naive.and_utc());
        }
    }

    let parsed = NaiveDate::parse_from_str(&text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc());
    if parsed.is_none() {
        tracing::debug!("Unrecognized timestamp {:?}", text);
    }
    parsed
}

/// Drop a leading `Mon,` / `Monday,` token. The weekday carries no
/// information the date does not, and feeds often get it wrong.
fn strip_weekday(text: &str) -> &str {
    match text.split_once(',') {
        Some((head, rest)) if !head.is_empty() && head.chars().all(char::is_alphabetic) => {
            rest.trim_start()
        }
        _ => text,
    }
}

/// Rewrite a trailing UTC zone name as a numeric `+0000` offset.
fn normalize_zone(text: &str) -> String {
    match text.rsplit_once(' ') {
        Some((rest, zone)) if UTC_ZONE_NAMES.contains(&zone.to_ascii_uppercase().as_str()) => {
            format!("{} +0000", rest.trim_end())
        }
        _ => text.to_string(),
    }
}
