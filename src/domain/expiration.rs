//! Parsing of caller-supplied expiration timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::domain::error::LinkError;

/// Date-time layouts accepted without an offset. They are read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f"];

/// Parses an ISO 8601 expiration value into an absolute UTC timestamp.
///
/// Accepted forms:
///
/// - RFC 3339 with offset: `2030-01-01T12:00:00+02:00`, `2030-01-01T10:00:00Z`
/// - Date-time without offset (UTC): `2030-01-01T10:00:00`, `2030-01-01T10:00`
/// - Plain date (midnight UTC): `2030-01-01`
///
/// Values in the past are accepted.
///
/// # Errors
///
/// Returns [`LinkError::InvalidExpiration`] if no layout matches.
pub fn parse_expiration(value: &str) -> Result<DateTime<Utc>, LinkError> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(parsed.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed.and_utc());
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| LinkError::InvalidExpiration {
            value: value.to_string(),
        })
}
