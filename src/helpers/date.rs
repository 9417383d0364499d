//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt::Write;

/// Format a CMS timestamp for display
///
/// Timestamps that cannot be parsed are shown as they came in.
///
/// # Examples
/// ```ignore
/// format_published("2024-01-05T10:30:00.000Z", "MMMM D, YYYY", Tz::UTC) // -> "January 5, 2024"
/// ```
pub fn format_published(timestamp: &str, format: &str, tz: Tz) -> String {
    match parse_timestamp(timestamp, tz) {
        Some(date) => format_date(&date, format),
        None => {
            tracing::debug!("Unparseable timestamp {:?}, shown verbatim", timestamp);
            timestamp.to_string()
        }
    }
}

/// Parse an ISO-8601 timestamp into the display timezone
///
/// Accepts RFC 3339, a timestamp without offset (read as UTC) or a bare date
/// (midnight in `tz`).
pub fn parse_timestamp(timestamp: &str, tz: Tz) -> Option<DateTime<Tz>> {
    let s = timestamp.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(s) {
        return Some(date.with_timezone(&tz));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&naive).with_timezone(&tz));
    }

    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()?;
    tz.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).earliest()
}

/// Format a date using Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "YYYY-MM-DD") // -> "2024-01-15"
/// ```
pub fn format_date<Z: TimeZone>(date: &DateTime<Z>, format: &str) -> String
where
    Z::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);

    // Bad specifiers surface as fmt errors rather than panics when written
    let mut out = String::new();
    if write!(out, "{}", date.format(&chrono_format)).is_err() {
        tracing::warn!("Invalid date format {:?}, using ISO 8601", format);
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each family
    let replacements = [
        // Year
        ("YYYY", "%Y"),
        ("YY", "%y"),
        // Month
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        // Day of month
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        // Hour
        ("HH", "%H"),
        ("hh", "%I"),
        // Minute
        ("mm", "%M"),
        // Second
        ("ss", "%S"),
        // Day of week
        ("dddd", "%A"),
        ("ddd", "%a"),
        // Timezone
        ("ZZ", "%z"),
        // Milliseconds
        ("SSS", "%3f"),
    ];

    let mut result = format.to_string();

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}
