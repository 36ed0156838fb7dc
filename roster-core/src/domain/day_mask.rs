//! Weekly operating-day masks.
//!
//! Each line carries a boolean per weekday saying whether it runs that
//! day. The backend stores this as a JSON map keyed by French day
//! names; by the time it reaches the domain it is a plain bitmask
//! indexed by [`chrono::Weekday`].

use chrono::Weekday;

/// Which weekdays a line operates, Monday through Sunday.
///
/// A record arriving without a calendar gets [`DayMask::weekdays`]
/// (Monday–Friday); see `DESIGN.md` for why that default was chosen
/// over "every day".
///
/// # Examples
///
/// ```
/// use chrono::Weekday;
/// use roster_core::domain::DayMask;
///
/// let mask = DayMask::weekdays();
/// assert!(mask.is_set(Weekday::Mon));
/// assert!(!mask.is_set(Weekday::Sat));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayMask([bool; 7]);

impl DayMask {
    /// A mask with no operating days.
    pub fn none() -> Self {
        Self([false; 7])
    }

    /// A mask operating every day of the week.
    pub fn all_days() -> Self {
        Self([true; 7])
    }

    /// Monday through Friday.
    pub fn weekdays() -> Self {
        Self([true, true, true, true, true, false, false])
    }

    /// Build a mask from explicit per-day flags, Monday first.
    pub fn from_days(days: [bool; 7]) -> Self {
        Self(days)
    }

    /// Whether the line operates on the given weekday.
    pub fn is_set(self, day: Weekday) -> bool {
        self.0[day.num_days_from_monday() as usize]
    }

    /// Set or clear a single weekday.
    pub fn set(&mut self, day: Weekday, operating: bool) {
        self.0[day.num_days_from_monday() as usize] = operating;
    }

    /// Number of operating days in the week.
    pub fn count(self) -> usize {
        self.0.iter().filter(|&&d| d).count()
    }

    /// Whether no day is set at all.
    pub fn is_empty(self) -> bool {
        self.0.iter().all(|&d| !d)
    }
}

impl Default for DayMask {
    fn default() -> Self {
        Self::weekdays()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekdays_mask() {
        let mask = DayMask::weekdays();

        assert!(mask.is_set(Weekday::Mon));
        assert!(mask.is_set(Weekday::Fri));
        assert!(!mask.is_set(Weekday::Sat));
        assert!(!mask.is_set(Weekday::Sun));
        assert_eq!(mask.count(), 5);
    }

    #[test]
    fn all_and_none() {
        assert_eq!(DayMask::all_days().count(), 7);
        assert!(!DayMask::all_days().is_empty());

        assert_eq!(DayMask::none().count(), 0);
        assert!(DayMask::none().is_empty());
    }

    #[test]
    fn default_is_weekdays() {
        assert_eq!(DayMask::default(), DayMask::weekdays());
    }

    #[test]
    fn set_and_clear() {
        let mut mask = DayMask::none();

        mask.set(Weekday::Sun, true);
        assert!(mask.is_set(Weekday::Sun));
        assert_eq!(mask.count(), 1);

        mask.set(Weekday::Sun, false);
        assert!(mask.is_empty());
    }

    #[test]
    fn from_days_order_is_monday_first() {
        let mask = DayMask::from_days([false, false, false, false, false, true, true]);

        assert!(mask.is_set(Weekday::Sat));
        assert!(mask.is_set(Weekday::Sun));
        assert!(!mask.is_set(Weekday::Wed));
    }
}
