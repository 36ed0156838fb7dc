//! Conversion from backend records to domain types.
//!
//! This is where raw records get validated: times and dates are
//! parsed strictly, statuses must be known, and the stringified
//! calendar blob is parsed against an explicit schema instead of being
//! poked at call sites. A record that fails here never reaches the
//! planning engines.

use chrono::NaiveDate;

use crate::domain::{
    DayMask, Driver, DriverId, DriverStatus, Line, LineId, OperatingWindow, Service, ServiceId,
    ServiceStatus, Shift, TimeOfDay,
};

use super::records::{CalendrierRecord, ConducteurRecord, LigneRecord, ServiceRecord};

/// Error during record to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RecordError {
    /// A time field failed to parse as "HH:MM".
    #[error("invalid time in {field}: {value}")]
    InvalidTime {
        /// Record field that held the value.
        field: &'static str,
        /// Offending value.
        value: String,
    },

    /// The date field is not an ISO date.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// The calendar blob is not valid JSON for the day-map schema.
    #[error("invalid calendar JSON: {0}")]
    InvalidCalendar(String),

    /// A status string is not one the backend defines.
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    /// Missing required field.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

/// Convert a line record, parsing its window and calendar.
///
/// A record with only one of the two window times is treated as having
/// no window on record, matching the portal's behaviour of skipping
/// window validation in that case. An absent calendar defaults to
/// Monday–Friday; a present but malformed one is an error rather than
/// a silent fallback.
pub fn line_from_record(rec: &LigneRecord) -> Result<Line, RecordError> {
    let window = match (rec.heure_debut.as_deref(), rec.heure_fin.as_deref()) {
        (Some(start), Some(end)) => Some(OperatingWindow::new(
            parse_time("heureDebut", start)?,
            parse_time("heureFin", end)?,
        )),
        _ => None,
    };

    let days = match rec.calendrier_json.as_deref() {
        None => DayMask::weekdays(),
        Some(json) => {
            let cal: CalendrierRecord = serde_json::from_str(json)
                .map_err(|e| RecordError::InvalidCalendar(e.to_string()))?;
            day_mask_from_record(&cal)
        }
    };

    Ok(Line {
        id: LineId(rec.id),
        number: rec.numero.clone(),
        name: rec.nom.clone(),
        vehicle_types: rec.types_vehicules.clone(),
        window,
        days,
        constraints: rec.contraintes.clone(),
    })
}

/// Convert a service record.
pub fn service_from_record(rec: &ServiceRecord) -> Result<Service, RecordError> {
    let statut = rec
        .statut
        .as_deref()
        .ok_or(RecordError::MissingField("statut"))?;
    let status = ServiceStatus::parse(statut)
        .ok_or_else(|| RecordError::UnknownStatus(statut.to_string()))?;

    Ok(Service {
        id: ServiceId(rec.id),
        date: parse_service_date(&rec.date)?,
        start: parse_time("heureDebut", &rec.heure_debut)?,
        end: parse_time("heureFin", &rec.heure_fin)?,
        status,
        driver: rec.conducteur_id.map(DriverId),
    })
}

/// Convert a service record to the flat shift snapshot the assignment
/// validator consumes.
pub fn shift_from_record(rec: &ServiceRecord) -> Result<Shift, RecordError> {
    Ok(Shift::new(
        parse_service_date(&rec.date)?,
        parse_time("heureDebut", &rec.heure_debut)?,
        parse_time("heureFin", &rec.heure_fin)?,
    ))
}

/// Convert a driver record.
pub fn driver_from_record(rec: &ConducteurRecord) -> Result<Driver, RecordError> {
    let statut = rec
        .statut
        .as_deref()
        .ok_or(RecordError::MissingField("statut"))?;
    let status = DriverStatus::parse(statut)
        .ok_or_else(|| RecordError::UnknownStatus(statut.to_string()))?;

    Ok(Driver {
        id: DriverId(rec.id),
        staff_number: rec.matricule.clone(),
        last_name: rec.nom.clone(),
        first_name: rec.prenom.clone(),
        licence: rec.permis.clone(),
        status,
    })
}

/// A driver's shifts from a full service list, excluding the service
/// being (re)assigned.
///
/// This is the caller-side preparation for
/// [`check_assignment`](crate::planning::check_assignment): filter the
/// service list to the driver's other assignments, then convert each
/// to a shift.
pub fn driver_shifts(
    records: &[ServiceRecord],
    driver: DriverId,
    exclude: Option<ServiceId>,
) -> Result<Vec<Shift>, RecordError> {
    records
        .iter()
        .filter(|r| r.conducteur_id == Some(driver.0))
        .filter(|r| exclude.is_none_or(|id| r.id != id.0))
        .map(shift_from_record)
        .collect()
}

fn parse_time(field: &'static str, value: &str) -> Result<TimeOfDay, RecordError> {
    TimeOfDay::parse_hhmm(value).map_err(|_| RecordError::InvalidTime {
        field,
        value: value.to_string(),
    })
}

/// Parse the backend's date field, accepting both bare ISO dates and
/// the noon-anchored datetime form the portal posts to dodge timezone
/// shifts.
fn parse_service_date(s: &str) -> Result<NaiveDate, RecordError> {
    let date_part = s.split('T').next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| RecordError::InvalidDate(s.to_string()))
}

fn day_mask_from_record(cal: &CalendrierRecord) -> DayMask {
    DayMask::from_days([
        cal.lundi,
        cal.mardi,
        cal.mercredi,
        cal.jeudi,
        cal.vendredi,
        cal.samedi,
        cal.dimanche,
    ])
}
