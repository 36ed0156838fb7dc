//! Line (route) definitions.

use std::fmt;

use super::{DayMask, OperatingWindow};

/// Backend identifier of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(pub i64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transit route with its daily operating window and weekly calendar.
///
/// Lines are created and edited by the external CRUD layer; the core
/// only reads them to validate services against the operating window
/// and to expand the day mask into concrete service dates.
#[derive(Debug, Clone)]
pub struct Line {
    /// Backend identifier.
    pub id: LineId,
    /// Public line number (e.g. "12A").
    pub number: String,
    /// Human-readable name.
    pub name: String,
    /// Ordered vehicle-type tags the line accepts.
    pub vehicle_types: Vec<String>,
    /// Daily operating bounds; `None` means the backend has no hours
    /// on record and window validation is skipped by the caller.
    pub window: Option<OperatingWindow>,
    /// Weekly operating days.
    pub days: DayMask,
    /// Free-text constraint tags.
    pub constraints: Vec<String>,
}

impl Line {
    /// Whether the line has a vehicle-type tag.
    pub fn accepts_vehicle_type(&self, tag: &str) -> bool {
        self.vehicle_types.iter().any(|t| t == tag)
    }

    /// Whether the line carries a constraint tag.
    pub fn has_constraint(&self, tag: &str) -> bool {
        self.constraints.iter().any(|c| c == tag)
    }
}
