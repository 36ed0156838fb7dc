//! Weekly service-date generation.
//!
//! Expands a line's operating-day mask into the concrete dates of the
//! week containing a reference "today". The reference date is supplied
//! by the caller (the portal fetches it from the server) rather than
//! read from the local clock, so client clock skew cannot shift the
//! generated week.

use chrono::{Datelike, Days, NaiveDate};

use crate::domain::DayMask;

/// The Monday on or before `reference`.
///
/// The generated week is always the Monday–Sunday week containing the
/// reference date; a Sunday reference anchors to the Monday six days
/// earlier, not the following one.
pub fn week_monday(reference: NaiveDate) -> NaiveDate {
    let back = u64::from(reference.weekday().num_days_from_monday());
    reference - Days::new(back)
}

/// Dates in the reference date's Monday–Sunday week on which the line
/// operates, in order.
///
/// The returned iterator is lazy, finite (at most 7 dates) and
/// restartable via `Clone`. An all-false mask yields nothing; there
/// are no error conditions.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use roster_core::domain::DayMask;
/// use roster_core::planning::week_dates;
///
/// // Wednesday 2025-03-12; a Mon–Fri line gets five dates.
/// let reference = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
/// let dates: Vec<_> = week_dates(reference, DayMask::weekdays()).collect();
///
/// assert_eq!(dates.first().unwrap().to_string(), "2025-03-10");
/// assert_eq!(dates.last().unwrap().to_string(), "2025-03-14");
/// ```
pub fn week_dates(reference: NaiveDate, mask: DayMask) -> WeekDates {
    WeekDates {
        monday: week_monday(reference),
        mask,
        offset: 0,
    }
}

/// Iterator over a week's operating dates. See [`week_dates`].
#[derive(Debug, Clone)]
pub struct WeekDates {
    monday: NaiveDate,
    mask: DayMask,
    offset: u8,
}

impl Iterator for WeekDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        while self.offset < 7 {
            let date = self.monday + Days::new(u64::from(self.offset));
            self.offset += 1;
            if self.mask.is_set(date.weekday()) {
                return Some(date);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(7 - usize::from(self.offset.min(7))))
    }
}
