//! Glucose readings and their validation.
//!
//! This module contains the pure data model for a single blood sugar
//! observation. Persistence lives in the [`store`] submodule.

pub mod store;

use crate::constants::{MAX_LEVEL, MIN_LEVEL, STORED_TIMESTAMP_FORMAT};
use crate::errors::ValidationError;
use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use store::ReadingStore;

/// One timestamped blood sugar measurement in mg/dL.
///
/// Serializes to `{"timestamp": "2024-05-01T08:30:00.123456", "level": 120}`.
/// Timestamps are local wall-clock times without an offset, always written
/// with six fractional digits. Any ISO-8601 precision is accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// When the reading was recorded.
    #[serde(with = "micros_timestamp")]
    pub timestamp: NaiveDateTime,
    /// Glucose concentration in mg/dL.
    pub level: u16,
}

/// Checks that a submitted level lies within the accepted range.
///
/// # Examples
///
/// ```
/// use sugarlog::readings::validate_level;
///
/// assert_eq!(validate_level(40).unwrap(), 40);
/// assert_eq!(validate_level(500).unwrap(), 500);
/// assert!(validate_level(39).is_err());
/// assert!(validate_level(501).is_err());
/// ```
pub fn validate_level(level: i64) -> Result<u16, ValidationError> {
    if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
        return Err(ValidationError::OutOfRange {
            level,
            min: MIN_LEVEL,
            max: MAX_LEVEL,
        });
    }
    u16::try_from(level).map_err(|_| ValidationError::OutOfRange {
        level,
        min: MIN_LEVEL,
        max: MAX_LEVEL,
    })
}

/// Drops sub-microsecond precision so a reading compares equal to its
/// stored form.
pub(crate) fn to_stored_precision(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.trunc_subsecs(6)
}

mod micros_timestamp {
    use super::*;

    pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&ts.format(STORED_TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<NaiveDateTime>().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    #[test]
    fn test_validate_level_boundaries() {
        assert_eq!(validate_level(MIN_LEVEL), Ok(40));
        assert_eq!(validate_level(MAX_LEVEL), Ok(500));
        assert_eq!(validate_level(120), Ok(120));

        assert_eq!(
            validate_level(39),
            Err(ValidationError::OutOfRange {
                level: 39,
                min: 40,
                max: 500
            })
        );
        assert!(validate_level(501).is_err());
        assert!(validate_level(-5).is_err());
        assert!(validate_level(i64::MAX).is_err());
    }

    #[test]
    fn test_reading_serialization_format() {
        let reading = Reading {
            timestamp: NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_micro_opt(8, 30, 0, 123_456)
                .unwrap(),
            level: 120,
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["timestamp"], "2024-05-01T08:30:00.123456");
        assert_eq!(json["level"], 120);
    }

    #[test]
    fn test_reading_accepts_timestamps_without_fraction() {
        let reading: Reading =
            serde_json::from_str(r#"{"timestamp": "2024-05-01T08:30:00", "level": 95}"#).unwrap();
        assert_eq!(reading.level, 95);
        assert_eq!(reading.timestamp.to_string(), "2024-05-01 08:30:00");

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["timestamp"], "2024-05-01T08:30:00.000000");
    }

    #[test]
    fn test_stored_precision_drops_nanoseconds() {
        let precise = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_nano_opt(8, 30, 0, 297_958_783)
            .unwrap();
        let reading = Reading {
            timestamp: to_stored_precision(precise),
            level: 101,
        };

        let json = serde_json::to_value(&reading).unwrap();
        assert_eq!(json["timestamp"], "2024-05-01T08:30:00.297958");

        let back: Reading = serde_json::from_value(json).unwrap();
        assert_eq!(back, reading);
    }

    #[test]
    fn test_reading_accepts_nanosecond_timestamps() {
        let reading: Reading = serde_json::from_str(
            r#"{"timestamp": "2024-05-01T08:30:00.297958783", "level": 101}"#,
        )
        .unwrap();
        assert_eq!(reading.timestamp.nanosecond(), 297_958_783);
    }
}
