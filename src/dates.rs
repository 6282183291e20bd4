//! Lenient date parsing for frontmatter and feed entries.
//!
//! Naive values (no offset) are read as UTC so the same content sorts the
//! same way on every build machine.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S", // Common format without timezone
    "%Y-%m-%dT%H:%M:%S", // RFC 3339 minus the offset
];

const OFFSET_DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S %z"];

pub fn parse_date(date_str: impl AsRef<str>) -> Option<DateTime<Utc>> {
    let date_str = date_str.as_ref().trim();
    if date_str.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(date_str) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(date_str) {
        return Some(parsed.with_timezone(&Utc));
    }

    for fmt in OFFSET_DATETIME_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(date_str, fmt) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    for fmt in NAIVE_DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(date_str, fmt) {
            return Some(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|datetime| datetime.and_utc())
}

/// Serde helper for a required, leniently formatted date.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("unrecognized date: {raw}")))
}

/// Serde helper for an optional date. Unparseable values become `None`.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}
