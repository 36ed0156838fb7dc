//! Driver (personnel) records.

use std::fmt;

/// Backend identifier of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DriverId(pub i64);

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Employment status of a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverStatus {
    /// Available for assignment.
    Active,
    /// Temporarily away; not assignable.
    OnLeave,
    /// Off the roster.
    Inactive,
}

impl DriverStatus {
    /// Parse the backend's French status string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Actif" => Some(Self::Active),
            "En congé" => Some(Self::OnLeave),
            "Inactif" => Some(Self::Inactive),
            _ => None,
        }
    }

    /// The backend's wire representation.
    pub fn as_wire_str(self) -> &'static str {
        match self {
            Self::Active => "Actif",
            Self::OnLeave => "En congé",
            Self::Inactive => "Inactif",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire_str())
    }
}

/// A person who may be assigned to services.
#[derive(Debug, Clone)]
pub struct Driver {
    /// Backend identifier.
    pub id: DriverId,
    /// Staff number ("matricule").
    pub staff_number: String,
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Licence category (e.g. "D").
    pub licence: Option<String>,
    /// Employment status.
    pub status: DriverStatus,
}

impl Driver {
    /// Whether the driver can currently take assignments.
    pub fn is_available(&self) -> bool {
        self.status == DriverStatus::Active
    }

    /// Display name, given name first.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver(status: DriverStatus) -> Driver {
        Driver {
            id: DriverId(3),
            staff_number: "C-0042".into(),
            last_name: "Martin".into(),
            first_name: "Luc".into(),
            licence: Some("D".into()),
            status,
        }
    }

    #[test]
    fn status_parse() {
        assert_eq!(DriverStatus::parse("Actif"), Some(DriverStatus::Active));
        assert_eq!(DriverStatus::parse("En congé"), Some(DriverStatus::OnLeave));
        assert_eq!(DriverStatus::parse("Inactif"), Some(DriverStatus::Inactive));
        assert_eq!(DriverStatus::parse("actif"), None);
    }

    #[test]
    fn status_roundtrip() {
        for status in [
            DriverStatus::Active,
            DriverStatus::OnLeave,
            DriverStatus::Inactive,
        ] {
            assert_eq!(DriverStatus::parse(status.as_wire_str()), Some(status));
        }
    }

    #[test]
    fn availability() {
        assert!(driver(DriverStatus::Active).is_available());
        assert!(!driver(DriverStatus::OnLeave).is_available());
        assert!(!driver(DriverStatus::Inactive).is_available());
    }

    #[test]
    fn full_name() {
        assert_eq!(driver(DriverStatus::Active).full_name(), "Luc Martin");
    }
}
