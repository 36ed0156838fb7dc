//! Driver assignment validation.
//!
//! Decides whether a driver can take a service given their other
//! shifts: no overlapping shift on the same date, and at least the
//! minimum rest between the end of one shift and the start of the
//! next. The portal runs this before issuing an "assign driver"
//! request; unassigning is always permitted and never reaches these
//! checks.

use tracing::debug;

use crate::domain::{Shift, TimeOfDay};

use super::config::Rules;

/// Rejection reasons for a proposed driver assignment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssignmentError {
    /// The driver already works an overlapping shift that date.
    #[error("driver already has an overlapping shift ({other_start}\u{2013}{other_end})")]
    OverlapConflict {
        /// Start of the conflicting shift.
        other_start: TimeOfDay,
        /// End of the conflicting shift.
        other_end: TimeOfDay,
    },

    /// The gap to a neighbouring shift is shorter than the minimum rest.
    #[error(
        "only {gap_mins} minutes of rest next to shift {other_start}\u{2013}{other_end} \
         (minimum {min_mins})"
    )]
    InsufficientRest {
        /// Actual gap in minutes.
        gap_mins: i64,
        /// Configured minimum.
        min_mins: i64,
        /// Start of the neighbouring shift.
        other_start: TimeOfDay,
        /// End of the neighbouring shift.
        other_end: TimeOfDay,
    },
}

/// Check whether `target` can be added to a driver's existing shifts.
///
/// `others` is the driver's other assigned shifts, excluding the
/// target itself; only entries sharing the target's calendar date are
/// considered. Gaps are measured on same-day wall-clock minutes: from
/// the end of one shift to the start of the other, in both directions,
/// and a gap in `[0, min_rest)` rejects the assignment.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roster_core::domain::{Shift, TimeOfDay};
/// use roster_core::planning::{Rules, check_assignment};
///
/// let t = |s| TimeOfDay::parse_hhmm(s).unwrap();
/// let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// let morning = Shift::new(date, t("06:00"), t("14:00"));
///
/// // Overlaps the morning shift
/// let target = Shift::new(date, t("13:00"), t("21:00"));
/// assert!(check_assignment(&Rules::default(), &target, &[morning]).is_err());
/// ```
pub fn check_assignment(
    rules: &Rules,
    target: &Shift,
    others: &[Shift],
) -> Result<(), AssignmentError> {
    for other in others.iter().filter(|o| o.date == target.date) {
        let overlaps = !(target.end.minute_of_day() <= other.start.minute_of_day()
            || target.start.minute_of_day() >= other.end.minute_of_day());
        if overlaps {
            debug!(date = %target.date, %other.start, %other.end, "assignment rejected: overlap");
            return Err(AssignmentError::OverlapConflict {
                other_start: other.start,
                other_end: other.end,
            });
        }

        // Rest gap in both directions: other before target, target before other
        let gap_after_other = target.start.minute_of_day() - other.end.minute_of_day();
        let gap_before_other = other.start.minute_of_day() - target.end.minute_of_day();

        for gap in [gap_after_other, gap_before_other] {
            if (0..rules.min_rest_mins).contains(&gap) {
                debug!(date = %target.date, gap, "assignment rejected: insufficient rest");
                return Err(AssignmentError::InsufficientRest {
                    gap_mins: gap,
                    min_mins: rules.min_rest_mins,
                    other_start: other.start,
                    other_end: other.end,
                });
            }
        }
    }

    Ok(())
}

/// Convenience wrapper matching the portal's call site: `None` means
/// the driver is being unassigned, which is always permitted.
pub fn can_assign(rules: &Rules, target: Option<&Shift>, others: &[Shift]) -> bool {
    match target {
        None => true,
        Some(target) => check_assignment(rules, target, others).is_ok(),
    }
}
