use chrono::{DateTime, NaiveDateTime};

use crate::models::DEVICE_DATETIME_FORMAT;

use super::FormatError;

/// ISO-like fallbacks accepted in addition to the device format.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse the free-form timestamp text after `Added on`.
///
/// Accepts the device's reference format (`Friday, May 13, 2016 11:23:26 PM`,
/// with or without zero-padded day and hour) and reasonable ISO-like
/// variants. RFC 3339 inputs keep their local wall-clock time; the offset is
/// discarded since the device format carries none.
pub fn parse_timestamp(text: &str) -> Result<NaiveDateTime, FormatError> {
    let text = text.trim();

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, DEVICE_DATETIME_FORMAT) {
        return Ok(timestamp);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(timestamp.naive_local());
    }
    for format in NAIVE_FORMATS {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(timestamp);
        }
    }

    Err(FormatError::Timestamp(text.to_string()))
}
