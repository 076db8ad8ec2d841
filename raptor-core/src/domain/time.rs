//! Transit time handling.
//!
//! Times are whole seconds from the origin of a service day. Schedules that
//! run past midnight keep counting upwards, so `25:10:00` is a valid time
//! meaning ten past one on the following morning.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u32 = 86_400;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A point in time on a service day, in seconds since the day's origin.
///
/// Deserializes from either an integer number of seconds or an
/// `"HH:MM:SS"` string; serializes as seconds.
///
/// # Examples
///
/// ```
/// use raptor_core::domain::TransitTime;
///
/// let t = TransitTime::parse_hms("08:05:00").unwrap();
/// assert_eq!(t.seconds(), 29_100);
/// assert_eq!(t.to_string(), "08:05:00");
///
/// // Past midnight
/// let late = TransitTime::parse_hms("25:10:00").unwrap();
/// assert_eq!(late.to_string(), "01:10:00+1d");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "TimeRepr", into = "i32")]
pub struct TransitTime(i32);

#[derive(Deserialize)]
#[serde(untagged)]
enum TimeRepr {
    Seconds(i32),
    Text(String),
}

impl TryFrom<TimeRepr> for TransitTime {
    type Error = TimeError;

    fn try_from(repr: TimeRepr) -> Result<Self, Self::Error> {
        match repr {
            TimeRepr::Seconds(seconds) => Ok(Self(seconds)),
            TimeRepr::Text(text) => Self::parse_hms(&text),
        }
    }
}

impl From<TransitTime> for i32 {
    fn from(value: TransitTime) -> Self {
        value.0
    }
}

impl TransitTime {
    /// The origin of the service day.
    pub const ORIGIN: Self = Self(0);

    /// Create a time from seconds since the service-day origin.
    pub const fn from_seconds(seconds: i32) -> Self {
        Self(seconds)
    }

    /// Create a time from hour, minute and second components.
    ///
    /// Hours are not limited to 0-23.
    pub const fn hms(hours: i32, minutes: i32, seconds: i32) -> Self {
        Self(hours * 3600 + minutes * 60 + seconds)
    }

    /// Parse a time from `HH:MM:SS` format.
    ///
    /// The hour field may exceed 23 for trips running past midnight.
    /// Minutes and seconds must be exactly two digits.
    pub fn parse_hms(s: &str) -> Result<Self, TimeError> {
        let mut fields = s.split(':');
        let (Some(h), Some(m), Some(sec), None) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(TimeError::new("expected HH:MM:SS format"));
        };

        if h.len() > 3 {
            return Err(TimeError::new("hour field too long"));
        }
        let hours = parse_digits(h).ok_or_else(|| TimeError::new("invalid hour digits"))?;

        if m.len() != 2 {
            return Err(TimeError::new("minutes must be two digits"));
        }
        let minutes = parse_digits(m).ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minutes > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        if sec.len() != 2 {
            return Err(TimeError::new("seconds must be two digits"));
        }
        let seconds = parse_digits(sec).ok_or_else(|| TimeError::new("invalid second digits"))?;
        if seconds > 59 {
            return Err(TimeError::new("second must be 0-59"));
        }

        Ok(Self::hms(hours, minutes, seconds))
    }

    /// Returns the number of seconds since the service-day origin.
    pub const fn seconds(self) -> i32 {
        self.0
    }

    /// Converts to a calendar date-time, given the date of the service day.
    ///
    /// Returns `None` if the result is out of chrono's range.
    pub fn to_date_time(self, service_date: NaiveDate) -> Option<NaiveDateTime> {
        service_date
            .and_hms_opt(0, 0, 0)?
            .checked_add_signed(Duration::seconds(i64::from(self.0)))
    }
}

fn parse_digits(s: &str) -> Option<i32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl Add<i32> for TransitTime {
    type Output = Self;

    fn add(self, seconds: i32) -> Self::Output {
        Self(self.0 + seconds)
    }
}

impl Sub<i32> for TransitTime {
    type Output = Self;

    fn sub(self, seconds: i32) -> Self::Output {
        Self(self.0 - seconds)
    }
}

impl Sub for TransitTime {
    type Output = i32;

    fn sub(self, other: Self) -> Self::Output {
        self.0 - other.0
    }
}

impl fmt::Debug for TransitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TransitTime({self})")
    }
}

impl fmt::Display for TransitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let total = self.0.unsigned_abs();
        let days = total / SECONDS_PER_DAY;
        let rem = total % SECONDS_PER_DAY;
        write!(
            f,
            "{sign}{:02}:{:02}:{:02}",
            rem / 3600,
            rem % 3600 / 60,
            rem % 60
        )?;
        if days > 0 {
            write!(f, "+{days}d")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        assert_eq!(TransitTime::parse_hms("00:00:00").unwrap().seconds(), 0);
        assert_eq!(TransitTime::parse_hms("08:00:00").unwrap().seconds(), 28_800);
        assert_eq!(TransitTime::parse_hms("8:05:00").unwrap().seconds(), 29_100);
        assert_eq!(TransitTime::parse_hms("23:59:59").unwrap().seconds(), 86_399);
        assert_eq!(TransitTime::parse_hms("25:10:00").unwrap().seconds(), 90_600);
    }

    #[test]
    fn reject_invalid_times() {
        assert!(TransitTime::parse_hms("").is_err());
        assert!(TransitTime::parse_hms("08:00").is_err());
        assert!(TransitTime::parse_hms("08:00:00:00").is_err());
        assert!(TransitTime::parse_hms("08:60:00").is_err());
        assert!(TransitTime::parse_hms("08:00:60").is_err());
        assert!(TransitTime::parse_hms("08:0:00").is_err());
        assert!(TransitTime::parse_hms("aa:00:00").is_err());
        assert!(TransitTime::parse_hms("-1:00:00").is_err());
        assert!(TransitTime::parse_hms("1000:00:00").is_err());
    }

    #[test]
    fn error_display() {
        let err = TransitTime::parse_hms("08:61:00").unwrap_err();
        assert_eq!(err.to_string(), "invalid time: minute must be 0-59");
    }

    #[test]
    fn display() {
        assert_eq!(TransitTime::hms(8, 5, 0).to_string(), "08:05:00");
        assert_eq!(TransitTime::hms(49, 0, 1).to_string(), "01:00:01+2d");
        assert_eq!(TransitTime::from_seconds(-90).to_string(), "-00:01:30");
        assert_eq!(
            format!("{:?}", TransitTime::hms(8, 0, 0)),
            "TransitTime(08:00:00)"
        );
    }

    #[test]
    fn arithmetic() {
        let t = TransitTime::hms(8, 0, 0);
        assert_eq!((t + 300).seconds(), 29_100);
        assert_eq!((t - 60).seconds(), 28_740);
        assert_eq!(TransitTime::hms(8, 30, 0) - t, 1800);
        assert!(t < t + 1);
    }

    #[test]
    fn deserialize_from_seconds_or_text() {
        let a: TransitTime = serde_json::from_str("28800").unwrap();
        let b: TransitTime = serde_json::from_str(r#""08:00:00""#).unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_str::<TransitTime>(r#""8am""#).is_err());
        assert_eq!(serde_json::to_string(&a).unwrap(), "28800");
    }

    #[test]
    fn to_date_time_crosses_midnight() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let dt = TransitTime::hms(25, 30, 0).to_date_time(date).unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2024, 3, 16).unwrap());
        assert_eq!(dt.format("%H:%M:%S").to_string(), "01:30:00");
    }
}
