//! Wall-clock time handling.
//!
//! The backend exchanges times as "HH:MM" strings with no date
//! component. This module provides a validated minutes-since-midnight
//! type together with the wrapping arithmetic used for operating
//! windows that cross midnight.

use std::fmt;

/// Number of minutes in a day; the modulus for wrapping arithmetic.
pub const MINUTES_PER_DAY: i64 = 1440;

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

/// A wall-clock time of day with minute precision.
///
/// Stored as minutes since midnight (0–1439). Unlike a full timestamp,
/// a `TimeOfDay` carries no date: whether "01:30" belongs to the same
/// day as "23:00" or the next one is decided by the arithmetic in
/// [`minutes_since`](Self::minutes_since).
///
/// # Examples
///
/// ```
/// use roster_core::domain::TimeOfDay;
///
/// let t = TimeOfDay::parse_hhmm("14:30").unwrap();
/// assert_eq!(t.to_string(), "14:30");
/// assert_eq!(t.minute_of_day(), 14 * 60 + 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Midnight, the zero point of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Create a time from hour and minute components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, TimeError> {
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }
        Ok(Self((hour * 60 + minute) as u16))
    }

    /// Parse a time from "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_core::domain::TimeOfDay;
    ///
    /// // Valid times
    /// assert!(TimeOfDay::parse_hhmm("00:00").is_ok());
    /// assert!(TimeOfDay::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(TimeOfDay::parse_hhmm("1430").is_err());
    /// assert!(TimeOfDay::parse_hhmm("14:3").is_err());
    /// assert!(TimeOfDay::parse_hhmm("25:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;

        Self::from_hm(hour, minute)
    }

    /// Returns the hour (0-23).
    pub fn hour(self) -> u32 {
        u32::from(self.0) / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(self) -> u32 {
        u32::from(self.0) % 60
    }

    /// Minutes since midnight (0–1439).
    pub fn minute_of_day(self) -> i64 {
        i64::from(self.0)
    }

    /// Minutes from `earlier` to `self`, wrapping at midnight.
    ///
    /// The result is always in `0..1440`; a `self` numerically before
    /// `earlier` is read as falling on the next day.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_core::domain::TimeOfDay;
    ///
    /// let dep = TimeOfDay::parse_hhmm("22:00").unwrap();
    /// let arr = TimeOfDay::parse_hhmm("02:00").unwrap();
    /// assert_eq!(arr.minutes_since(dep), 240);
    /// assert_eq!(dep.minutes_since(arr), 1200);
    /// ```
    pub fn minutes_since(self, earlier: TimeOfDay) -> i64 {
        (self.minute_of_day() - earlier.minute_of_day()).rem_euclid(MINUTES_PER_DAY)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TimeOfDay({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
