//! Service time-window validation.
//!
//! Decides whether a proposed service's start/end pair is internally
//! valid and fits inside its line's operating window. The portal runs
//! this before issuing a "create service" request so a bad window is
//! caught without a server round trip.
//!
//! Containment uses a single rule for every combination of the line
//! and the service crossing midnight: unroll both onto the axis that
//! starts at the window's opening time, then require
//! `offset + duration <= span` (see [`OperatingWindow::contains_span`]).

use std::fmt;

use tracing::debug;

use crate::domain::{OperatingWindow, TimeOfDay};

use super::config::Rules;

/// Which side of the operating window a service violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowBound {
    /// The service starts before the window opens.
    BeforeStart,
    /// The service starts inside the window but ends after it closes.
    AfterEnd,
}

impl fmt::Display for WindowBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeStart => f.write_str("starts before the window opens"),
            Self::AfterEnd => f.write_str("ends after the window closes"),
        }
    }
}

/// Rejection reasons for a proposed service window.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// Start and end coincide, so the service has no length.
    #[error("service start and end are identical")]
    InvalidWindow,

    /// The service is longer than the allowed maximum.
    #[error("service lasts {duration_mins} minutes, above the {max_mins} minute maximum")]
    DurationExceeded {
        /// Proposed length in minutes.
        duration_mins: i64,
        /// Configured ceiling.
        max_mins: i64,
    },

    /// The service does not fit inside the line's operating window.
    #[error("service {bound} ({window_start}\u{2013}{window_end})")]
    OutsideOperatingWindow {
        /// Which bound was violated, for a precise user-facing message.
        bound: WindowBound,
        /// Window opening time.
        window_start: TimeOfDay,
        /// Window closing time.
        window_end: TimeOfDay,
    },
}

/// Validate a proposed service against its line's operating window.
///
/// The duration is read modulo 24 hours, so an end numerically before
/// the start means the service itself crosses midnight. Duration
/// failures are reported before containment failures.
///
/// # Examples
///
/// ```
/// use roster_core::domain::{OperatingWindow, TimeOfDay};
/// use roster_core::planning::{Rules, check_window};
///
/// let t = |s| TimeOfDay::parse_hhmm(s).unwrap();
/// let window = OperatingWindow::new(t("06:00"), t("22:00"));
///
/// assert!(check_window(&Rules::default(), t("08:00"), t("16:00"), window).is_ok());
/// assert!(check_window(&Rules::default(), t("05:00"), t("09:00"), window).is_err());
/// ```
pub fn check_window(
    rules: &Rules,
    start: TimeOfDay,
    end: TimeOfDay,
    window: OperatingWindow,
) -> Result<(), WindowError> {
    let duration = end.minutes_since(start);

    if duration == 0 {
        return Err(WindowError::InvalidWindow);
    }
    if duration > rules.max_service_mins {
        debug!(%start, %end, duration, "service rejected: over maximum length");
        return Err(WindowError::DurationExceeded {
            duration_mins: duration,
            max_mins: rules.max_service_mins,
        });
    }

    let span = window.span_mins();
    let offset = window.offset_mins(start);

    if offset > span {
        debug!(%start, %end, offset, span, "service rejected: starts outside window");
        return Err(WindowError::OutsideOperatingWindow {
            bound: WindowBound::BeforeStart,
            window_start: window.start,
            window_end: window.end,
        });
    }
    if offset + duration > span {
        debug!(%start, %end, offset, duration, span, "service rejected: overruns window");
        return Err(WindowError::OutsideOperatingWindow {
            bound: WindowBound::AfterEnd,
            window_start: window.start,
            window_end: window.end,
        });
    }

    Ok(())
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

    fn check(start: &str, end: &str, w: OperatingWindow) -> Result<(), WindowError> {
        check_window(&Rules::default(), t(start), t(end), w)
    }

    #[test]
    fn accepts_service_inside_daytime_window() {
        let w = window("06:00", "22:00");

        assert!(check("06:00", "14:00", w).is_ok());
        assert!(check("12:00", "22:00", w).is_ok());
    }

    #[test]
    fn zero_duration_rejected() {
        let w = window("06:00", "22:00");

        assert_eq!(check("08:00", "08:00", w), Err(WindowError::InvalidWindow));
    }

    #[test]
    fn ten_hours_is_the_ceiling() {
        let w = window("04:00", "23:00");

        // Exactly 600 minutes is accepted
        assert!(check("06:00", "16:00", w).is_ok());

        // 601 minutes is rejected
        assert_eq!(
            check("06:00", "16:01", w),
            Err(WindowError::DurationExceeded {
                duration_mins: 601,
                max_mins: 600,
            })
        );
    }

    #[test]
    fn before_start_detail() {
        let w = window("06:00", "22:00");

        assert_eq!(
            check("05:00", "09:00", w),
            Err(WindowError::OutsideOperatingWindow {
                bound: WindowBound::BeforeStart,
                window_start: t("06:00"),
                window_end: t("22:00"),
            })
        );
    }

    #[test]
    fn after_end_detail() {
        let w = window("06:00", "22:00");

        assert_eq!(
            check("20:00", "23:00", w),
            Err(WindowError::OutsideOperatingWindow {
                bound: WindowBound::AfterEnd,
                window_start: t("06:00"),
                window_end: t("22:00"),
            })
        );
    }

    #[test]
    fn overnight_line_accepts_both_sides_of_midnight() {
        let w = window("22:00", "06:00");

        assert!(check("22:00", "23:30", w).is_ok()); // before midnight
        assert!(check("01:00", "05:00", w).is_ok()); // after midnight
        assert!(check("23:00", "03:00", w).is_ok()); // crossing midnight
    }

    #[test]
    fn overnight_line_rejects_out_of_window() {
        let w = window("22:00", "06:00");

        // Starts in the dead zone between close and open
        assert_eq!(
            check("12:00", "14:00", w),
            Err(WindowError::OutsideOperatingWindow {
                bound: WindowBound::BeforeStart,
                window_start: t("22:00"),
                window_end: t("06:00"),
            })
        );

        // Starts inside but overruns the morning close
        assert_eq!(
            check("23:00", "07:00", w),
            Err(WindowError::OutsideOperatingWindow {
                bound: WindowBound::AfterEnd,
                window_start: t("22:00"),
                window_end: t("06:00"),
            })
        );
    }

    #[test]
    fn full_span_service_fails_on_duration_first() {
        // A service equal to the whole 04:37–00:10 window spans 1173
        // minutes: containment alone accepts it (see OperatingWindow
        // tests) but the 10-hour ceiling rejects it first.
        let w = window("04:37", "00:10");

        assert_eq!(
            check("04:37", "00:10", w),
            Err(WindowError::DurationExceeded {
                duration_mins: 1173,
                max_mins: 600,
            })
        );
    }

    #[test]
    fn custom_rules_change_the_ceiling() {
        let rules = Rules::new(120, 720);
        let w = window("06:00", "22:00");

        assert!(check_window(&rules, t("08:00"), t("10:00"), w).is_ok());
        assert!(matches!(
            check_window(&rules, t("08:00"), t("10:01"), w),
            Err(WindowError::DurationExceeded { .. })
        ));
    }

    #[test]
    fn error_display() {
        let err = WindowError::OutsideOperatingWindow {
            bound: WindowBound::BeforeStart,
            window_start: t("06:00"),
            window_end: t("22:00"),
        };
        assert_eq!(
            err.to_string(),
            "service starts before the window opens (06:00\u{2013}22:00)"
        );

        let err = WindowError::DurationExceeded {
            duration_mins: 601,
            max_mins: 600,
        };
        assert_eq!(
            err.to_string(),
            "service lasts 601 minutes, above the 600 minute maximum"
        );
    }
}
