//! Entry timestamps.
//!
//! Accepts ISO-8601 dates and date-times, with or without a UTC offset, and
//! renders them with seconds precision.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};

use crate::error::{JournalError, Result};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Point in time an entry was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryTimestamp {
    /// Wall-clock time without an offset.
    Local(NaiveDateTime),
    /// Time with an explicit UTC offset.
    Offset(DateTime<FixedOffset>),
}

impl EntryTimestamp {
    /// Current local wall-clock time.
    pub fn now() -> Self {
        Self::Local(Local::now().naive_local())
    }

    /// Parse an ISO-8601 date or date-time.
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || JournalError::InvalidTimestamp(input.to_string());

        // `%:z` wants a numeric offset.
        let normalized = match input.strip_suffix(['Z', 'z']) {
            Some(rest) => format!("{rest}+00:00"),
            None => input.to_string(),
        };
        let normalized = with_minutes(&normalized).unwrap_or(normalized);

        for fmt in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(&normalized, fmt) {
                return Ok(Self::Offset(dt));
            }
        }

        for fmt in NAIVE_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(&normalized, fmt) {
                return Ok(Self::Local(dt));
            }
        }

        let date = NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| invalid())?;
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;
        Ok(Self::Local(midnight))
    }

    /// ISO-8601 with seconds precision; fractional seconds are dropped.
    pub fn to_iso_seconds(&self) -> String {
        match self {
            Self::Local(dt) => dt.format("%Y-%m-%dT%H:%M:%S").to_string(),
            Self::Offset(dt) => dt.format("%Y-%m-%dT%H:%M:%S%:z").to_string(),
        }
    }
}

/// Pad an hour-only time (`2024-03-05T08`, `2024-03-05 08+02:00`) to
/// `HH:00`; chrono will not build a time without minutes.
fn with_minutes(input: &str) -> Option<String> {
    let bytes = input.as_bytes();
    let hour_only = bytes.len() >= 13
        && matches!(bytes[10], b'T' | b' ')
        && bytes[11].is_ascii_digit()
        && bytes[12].is_ascii_digit()
        && matches!(bytes.get(13), None | Some(b'+' | b'-'));
    hour_only.then(|| format!("{}:00{}", &input[..13], &input[13..]))
}

impl FromStr for EntryTimestamp {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for EntryTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_seconds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(input: &str) -> String {
        EntryTimestamp::parse(input).unwrap().to_iso_seconds()
    }

    #[test]
    fn test_naive_datetime() {
        assert_eq!(iso("2024-03-05T08:15:30"), "2024-03-05T08:15:30");
        assert_eq!(iso("2024-03-05 08:15:30"), "2024-03-05T08:15:30");
    }

    #[test]
    fn test_minutes_precision_gets_zero_seconds() {
        assert_eq!(iso("2024-03-05T08:15"), "2024-03-05T08:15:00");
    }

    #[test]
    fn test_fraction_truncated() {
        assert_eq!(iso("2024-03-05T08:15:30.987654"), "2024-03-05T08:15:30");
    }

    #[test]
    fn test_hour_only() {
        assert_eq!(iso("2024-03-05T08"), "2024-03-05T08:00:00");
        assert_eq!(iso("2024-03-05 08"), "2024-03-05T08:00:00");
        assert_eq!(iso("2024-03-05T08+02:00"), "2024-03-05T08:00:00+02:00");
        assert_eq!(iso("2024-03-05T08Z"), "2024-03-05T08:00:00+00:00");
    }

    #[test]
    fn test_date_only_is_midnight() {
        assert_eq!(iso("2024-03-05"), "2024-03-05T00:00:00");
    }

    #[test]
    fn test_offset_preserved() {
        assert_eq!(iso("2024-03-05T08:15:30+02:00"), "2024-03-05T08:15:30+02:00");
        assert_eq!(iso("2024-03-05T08:15:30Z"), "2024-03-05T08:15:30+00:00");
    }

    #[test]
    fn test_invalid_inputs() {
        for bad in ["", "yesterday", "2024-13-01", "2024-02-30T10:00:00", "10:00", "2024-03-05T8", "2024-03-05T25"] {
            let err = EntryTimestamp::parse(bad).unwrap_err();
            assert!(matches!(err, JournalError::InvalidTimestamp(ref s) if s == bad));
        }
    }

    #[test]
    fn test_error_message() {
        let err = EntryTimestamp::parse("nope").unwrap_err();
        assert_eq!(err.to_string(), "Invalid timestamp: nope");
    }

    #[test]
    fn test_now_has_seconds_precision() {
        let now = EntryTimestamp::now().to_iso_seconds();
        assert_eq!(now.len(), "2024-03-05T08:15:30".len());
        assert!(EntryTimestamp::parse(&now).is_ok());
    }
}
