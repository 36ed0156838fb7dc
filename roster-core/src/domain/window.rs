//! Line operating windows.
//!
//! A line's services may only run between its daily start and end
//! times. An end numerically before the start means the window crosses
//! midnight (e.g. 22:00–02:00), so all containment arithmetic is done
//! modulo 24 hours.

use super::time::TimeOfDay;

/// The daily time bounds within which a line's services may run.
///
/// `end < start` signals a window that crosses midnight. The window
/// 04:37–00:10 opens at 04:37 and closes at 00:10 the next day.
///
/// # Examples
///
/// ```
/// use roster_core::domain::{OperatingWindow, TimeOfDay};
///
/// let night = OperatingWindow::new(
///     TimeOfDay::parse_hhmm("22:00").unwrap(),
///     TimeOfDay::parse_hhmm("02:00").unwrap(),
/// );
/// assert!(night.crosses_midnight());
/// assert_eq!(night.span_mins(), 240);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatingWindow {
    /// Daily opening time.
    pub start: TimeOfDay,
    /// Daily closing time, possibly on the next calendar day.
    pub end: TimeOfDay,
}

impl OperatingWindow {
    /// Creates a new operating window.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// Whether the window wraps past midnight.
    pub fn crosses_midnight(self) -> bool {
        self.end < self.start
    }

    /// Total length of the window in minutes, modulo 24 hours.
    ///
    /// A window whose start and end coincide has a span of zero and
    /// contains nothing.
    pub fn span_mins(self) -> i64 {
        self.end.minutes_since(self.start)
    }

    /// Whether a service of `duration_mins` starting at `start` lies
    /// entirely inside the window.
    ///
    /// Both the window and the service are unrolled onto the axis that
    /// begins at the window's opening time, which handles every
    /// combination of the window and the service crossing midnight
    /// with a single rule: the service's offset from the opening time
    /// plus its duration must not exceed the window's span.
    pub fn contains_span(self, start: TimeOfDay, duration_mins: i64) -> bool {
        let offset = start.minutes_since(self.start);
        offset + duration_mins <= self.span_mins()
    }

    /// Offset of a time from the window's opening, in `0..1440`.
    pub fn offset_mins(self, time: TimeOfDay) -> i64 {
        time.minutes_since(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        TimeOfDay::parse_hhmm(s).unwrap()
    }

    fn window(start: &str, end: &str) -> OperatingWindow {
        OperatingWindow::new(t(start), t(end))
    }

    #[test]
    fn daytime_window() {
        let w = window("06:00", "22:00");

        assert!(!w.crosses_midnight());
        assert_eq!(w.span_mins(), 960);
    }

    #[test]
    fn overnight_window() {
        let w = window("22:00", "02:00");

        assert!(w.crosses_midnight());
        assert_eq!(w.span_mins(), 240);
    }

    #[test]
    fn contains_span_daytime() {
        let w = window("06:00", "22:00");

        assert!(w.contains_span(t("06:00"), 60));
        assert!(w.contains_span(t("21:00"), 60));
        assert!(!w.contains_span(t("21:30"), 60)); // overruns the close
        assert!(!w.contains_span(t("05:00"), 30)); // before the open
    }

    #[test]
    fn contains_span_overnight() {
        let w = window("22:00", "02:00");

        assert!(w.contains_span(t("22:00"), 240)); // full span
        assert!(w.contains_span(t("23:00"), 120)); // crosses midnight inside
        assert!(w.contains_span(t("01:00"), 60)); // wholly after midnight
        assert!(!w.contains_span(t("01:00"), 120)); // overruns 02:00
        assert!(!w.contains_span(t("21:00"), 30)); // before the open
    }

    #[test]
    fn contains_full_span_exactly() {
        // A service equal to the whole window is contained: 04:37–00:10
        // against the same 04:37–00:10 window.
        let w = window("04:37", "00:10");
        let duration = t("00:10").minutes_since(t("04:37"));

        assert_eq!(duration, 1173);
        assert!(w.contains_span(t("04:37"), duration));
        assert!(!w.contains_span(t("04:37"), duration + 1));
    }

    #[test]
    fn zero_span_window_contains_nothing() {
        let w = window("08:00", "08:00");

        assert_eq!(w.span_mins(), 0);
        assert!(!w.contains_span(t("08:00"), 1));
    }

    #[test]
    fn offset_mins_wraps() {
        let w = window("22:00", "02:00");

        assert_eq!(w.offset_mins(t("22:00")), 0);
        assert_eq!(w.offset_mins(t("01:00")), 180);
        assert_eq!(w.offset_mins(t("21:00")), 1380);
    }
}
