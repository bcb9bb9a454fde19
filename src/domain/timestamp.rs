//! Local wall-clock timestamp with second precision.

use chrono::{Local, NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// Textual form used for display and storage.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The moment a note was written, in local time, truncated to whole seconds.
///
/// ```
/// use jot::domain::Timestamp;
///
/// let ts: Timestamp = "2024-03-01 09:15:00".parse().unwrap();
/// assert_eq!(ts.to_string(), "2024-03-01 09:15:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Returns the current local time.
    pub fn now() -> Self {
        Self::from_naive(Local::now().naive_local())
    }

    /// Wraps a naive datetime, dropping sub-second precision.
    pub fn from_naive(datetime: NaiveDateTime) -> Self {
        Self(datetime.with_nanosecond(0).unwrap_or(datetime))
    }

    /// Returns the underlying datetime.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl fmt::Debug for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp(\"{}\")", self)
    }
}

/// Error returned when a timestamp string does not match [`TIMESTAMP_FORMAT`].
#[derive(Debug, Clone)]
pub struct ParseTimestampError {
    value: String,
}

impl fmt::Display for ParseTimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid timestamp '{}': expected YYYY-MM-DD HH:MM:SS",
            self.value
        )
    }
}

impl std::error::Error for ParseTimestampError {}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
            .map(Self::from_naive)
            .map_err(|_| ParseTimestampError {
                value: s.to_string(),
            })
    }
}
