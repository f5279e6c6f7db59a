//! Timestamp normalization across heterogeneous feed date formats.
//!
//! Feeds in the wild disagree about dates: RSS 2.0 mandates RFC 2822, Atom
//! uses RFC 3339, and plenty of publishers emit bare naive datetimes. This
//! module folds all of them into a single timezone-aware [`DateTime<Utc>`].
//!
//! Timezone-naive input is treated as already-UTC. That is a policy choice,
//! not a parsing artifact: absence of an offset never means "unknown".

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::error::Error;
use std::fmt;

/// Naive datetime layouts accepted after the RFC formats fail.
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// A timestamp string that matched none of the accepted formats.
///
/// Callers treat this as "skip this entry"; it is never fatal to a run.
#[derive(Debug, Clone)]
pub struct DateParseError {
    raw: String,
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized timestamp format: {:?}", self.raw)
    }
}

impl Error for DateParseError {}

/// Parse a feed timestamp string into a timezone-aware instant.
///
/// Formats are tried in order: RFC 2822, RFC 3339, naive datetime
/// (`%Y-%m-%d %H:%M:%S` and the `T`-separated variant, assumed UTC), and a
/// bare `%Y-%m-%d` date (midnight UTC).
///
/// # Errors
///
/// Returns [`DateParseError`] when no format matches.
pub fn normalize_timestamp(raw: &str) -> Result<DateTime<Utc>, DateParseError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(DateTime::from_naive_utc_and_offset(naive, Utc));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).unwrap();
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }

    Err(DateParseError {
        raw: raw.to_string(),
    })
}
