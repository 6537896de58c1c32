//! Timestamp normalization for API payloads.
//!
//! The API reports instants in several shapes. All of them are normalized to
//! [`DateTime<Utc>`] when a record is deserialized:
//!
//! - RFC 3339 strings (`2024-03-10T10:30:00.000000+00:00`)
//! - `YYYY-MM-DD HH:MM:SS[.ffffff]` strings, read as UTC
//! - plain `YYYY-MM-DD` dates, read as midnight UTC
//! - epoch numbers in seconds, or milliseconds above `10^11`

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer};

/// Epoch values above this are milliseconds.
const MILLISECONDS_THRESHOLD: i64 = 100_000_000_000;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Parses a textual timestamp in any of the accepted formats.
///
/// # Example
///
/// ```rust
/// use starkinfra::rest::datetime::parse_timestamp;
///
/// let a = parse_timestamp("2024-03-10T10:30:00+00:00").unwrap();
/// let b = parse_timestamp("2024-03-10 10:30:00").unwrap();
/// assert_eq!(a, b);
/// assert!(parse_timestamp("yesterday").is_none());
/// ```
#[must_use]
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&parsed));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&parsed));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| Utc.from_utc_datetime(&midnight))
}

fn from_epoch(value: i64) -> Option<DateTime<Utc>> {
    if value.abs() > MILLISECONDS_THRESHOLD {
        Utc.timestamp_millis_opt(value).single()
    } else {
        Utc.timestamp_opt(value, 0).single()
    }
}

/// Deserializes an optional timestamp, accepting every supported shape.
///
/// Use with `#[serde(default, deserialize_with = "...")]`.
///
/// # Errors
///
/// Fails when the value is present but matches none of the formats.
pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)?;

    match raw {
        None => Ok(None),
        Some(RawTimestamp::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawTimestamp::Text(text)) => parse_timestamp(&text)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp '{text}'"))),
        Some(RawTimestamp::Integer(value)) => from_epoch(value)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("timestamp {value} out of range"))),
        #[allow(clippy::cast_possible_truncation)]
        Some(RawTimestamp::Float(value)) => from_epoch(value as i64)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("timestamp {value} out of range"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "deserialize_option")]
        created: Option<DateTime<Utc>>,
    }

    fn created(value: serde_json::Value) -> Option<DateTime<Utc>> {
        serde_json::from_value::<Record>(json!({ "created": value }))
            .unwrap()
            .created
    }

    fn expected() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_rfc3339_with_offset_is_normalized_to_utc() {
        assert_eq!(created(json!("2024-03-10T07:30:00-03:00")), Some(expected()));
        assert_eq!(
            created(json!("2024-03-10T10:30:00.000000+00:00")),
            Some(expected())
        );
    }

    #[test]
    fn test_space_separated_datetime() {
        assert_eq!(created(json!("2024-03-10 10:30:00")), Some(expected()));
        assert_eq!(created(json!("2024-03-10 10:30:00.000000")), Some(expected()));
    }

    #[test]
    fn test_plain_date_is_midnight() {
        assert_eq!(
            created(json!("2024-03-10")),
            Some(Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_epoch_seconds_and_milliseconds() {
        let seconds = expected().timestamp();
        assert_eq!(created(json!(seconds)), Some(expected()));
        assert_eq!(created(json!(seconds * 1000)), Some(expected()));
    }

    #[test]
    fn test_missing_null_and_empty_are_none() {
        let record: Record = serde_json::from_value(json!({})).unwrap();
        assert!(record.created.is_none());
        assert!(created(json!(null)).is_none());
        assert!(created(json!("")).is_none());
    }

    #[test]
    fn test_garbage_is_rejected() {
        let result = serde_json::from_value::<Record>(json!({"created": "not a date"}));
        assert!(result.is_err());
    }
}
