//! Timestamp model for entry and exit times.
//!
//! A [`Timestamp`] is a time of day encoded as four digits, `HHMM`. Hour 24
//! and minute 60 are accepted, so `2400` and `0960` are both valid and map
//! to 1440 and 600 total minutes respectively.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Highest accepted hour value.
pub const MAX_HOUR: u8 = 24;

/// Highest accepted minute value.
pub const MAX_MINUTE: u8 = 60;

/// A time of day with minute precision.
///
/// Two timestamps are equal only when both fields match, so `0960` and
/// `1000` differ even though they describe the same minute of the day.
///
/// # Examples
///
/// ```
/// use parking_engine::models::Timestamp;
///
/// let entry: Timestamp = "0930".parse().unwrap();
/// assert_eq!(entry.hour(), 9);
/// assert_eq!(entry.minute(), 30);
/// assert_eq!(entry.total_minutes(), 570);
/// assert_eq!(entry.to_string(), "0930");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Timestamp {
    hour: u8,
    minute: u8,
}

impl Timestamp {
    /// Creates a timestamp from an hour and minute.
    ///
    /// Returns `InvalidTimeFormat` when the hour exceeds 24 or the minute
    /// exceeds 60.
    pub fn new(hour: u8, minute: u8) -> EngineResult<Self> {
        if hour > MAX_HOUR {
            return Err(EngineError::InvalidTimeFormat {
                input: format!("{:02}{:02}", hour, minute),
                message: "Invalid Hour".to_string(),
            });
        }
        if minute > MAX_MINUTE {
            return Err(EngineError::InvalidTimeFormat {
                input: format!("{:02}{:02}", hour, minute),
                message: "Invalid Minutes".to_string(),
            });
        }
        Ok(Self { hour, minute })
    }

    /// Returns the hour component.
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Returns the minute component.
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Returns the number of minutes since `0000`.
    pub fn total_minutes(&self) -> u32 {
        u32::from(self.hour) * 60 + u32::from(self.minute)
    }

    /// Returns the minutes elapsed between `self` and a later timestamp.
    ///
    /// Equal timestamps yield zero. Returns `InvalidInterval` when `later`
    /// is earlier than `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// use parking_engine::models::Timestamp;
    ///
    /// let entry: Timestamp = "0945".parse().unwrap();
    /// let exit: Timestamp = "1105".parse().unwrap();
    /// assert_eq!(entry.difference(&exit).unwrap(), 80);
    /// assert!(exit.difference(&entry).is_err());
    /// ```
    pub fn difference(&self, later: &Timestamp) -> EngineResult<u32> {
        later
            .total_minutes()
            .checked_sub(self.total_minutes())
            .ok_or(EngineError::InvalidInterval {
                entry: *self,
                exit: *later,
            })
    }
}

impl FromStr for Timestamp {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EngineError::InvalidTimeFormat {
                input: s.to_string(),
                message: "expected 4 digits in HHMM form".to_string(),
            });
        }

        let bytes = s.as_bytes();
        let hour = (bytes[0] - b'0') * 10 + (bytes[1] - b'0');
        let minute = (bytes[2] - b'0') * 10 + (bytes[3] - b'0');

        Self::new(hour, minute).map_err(|err| match err {
            EngineError::InvalidTimeFormat { message, .. } => EngineError::InvalidTimeFormat {
                input: s.to_string(),
                message,
            },
            other => other,
        })
    }
}

impl TryFrom<String> for Timestamp {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Timestamp> for String {
    fn from(value: Timestamp) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}
