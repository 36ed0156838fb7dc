//! Scheduled services (trip-shifts).
//!
//! A `Service` is one scheduled shift of a line on a concrete calendar
//! date. `Shift` is the flat `{date, start, end}` snapshot the
//! assignment validator works over; it deliberately carries nothing
//! else so a caller can build one from any record shape.

use std::fmt;

use chrono::NaiveDate;

use super::driver::DriverId;
use super::time::TimeOfDay;

/// Backend identifier of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceId(pub i64);

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a service.
///
/// Cancellation has no status of its own: a cancelled service is
/// deleted by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceStatus {
    /// Scheduled, not yet run.
    Planned,
    /// Run and validated.
    Completed,
}

impl ServiceStatus {
    /// Parse the backend's French status string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Planifiée" => Some(Self::Planned),
            "Terminée" => Some(Self::Completed),
            _ => None,
        }
    }

    /// The backend's wire representation.
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Planned => "Planifiée",
            Self::Completed => "Terminée",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

/// One scheduled trip-shift of a line on a calendar date.
#[derive(Debug, Clone)]
pub struct Service {
    /// Backend identifier.
    pub id: ServiceId,
    /// Calendar date the service runs on.
    pub date: NaiveDate,
    /// Departure from the depot.
    pub start: TimeOfDay,
    /// Return to the depot, possibly past midnight.
    pub end: TimeOfDay,
    /// Lifecycle status.
    pub status: ServiceStatus,
    /// Assigned driver, if any.
    pub driver: Option<DriverId>,
}

impl Service {
    /// The flat interval snapshot used for assignment checks.
    pub fn shift(&self) -> Shift {
        Shift {
            date: self.date,
            start: self.start,
            end: self.end,
        }
    }

    /// Whether a driver is assigned.
    pub fn is_assigned(&self) -> bool {
        self.driver.is_some()
    }
}

/// A dated time interval, the unit the assignment validator reasons over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shift {
    /// Calendar date of the shift.
    pub date: NaiveDate,
    /// Shift start.
    pub start: TimeOfDay,
    /// Shift end.
    pub end: TimeOfDay,
}

impl Shift {
    /// Creates a shift from its parts.
    pub fn new(date: NaiveDate, start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { date, start, end }
    }
}
