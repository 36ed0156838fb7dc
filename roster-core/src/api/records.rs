//! Backend record DTOs.
//!
//! These types map directly to the JSON records the REST backend
//! serves. Field names stay in the backend's French, camelCased;
//! `Option` is used wherever the backend omits fields rather than
//! sending null.

use serde::Deserialize;

/// A line ("ligne") record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LigneRecord {
    /// Backend identifier.
    pub id: i64,

    /// Public line number.
    pub numero: String,

    /// Line name.
    pub nom: String,

    /// Accepted vehicle-type tags.
    #[serde(default)]
    pub types_vehicules: Vec<String>,

    /// Daily opening time, "HH:MM". Absent when no hours are on record.
    pub heure_debut: Option<String>,

    /// Daily closing time, "HH:MM".
    pub heure_fin: Option<String>,

    /// Stringified JSON map of operating days, keyed by French day
    /// names ("lundi".."dimanche"). Absent means no calendar recorded.
    pub calendrier_json: Option<String>,

    /// Free-text constraint tags.
    #[serde(default)]
    pub contraintes: Vec<String>,
}

/// The parsed shape of [`LigneRecord::calendrier_json`].
///
/// Absent keys default to false, matching how the portal's checkboxes
/// serialize the map.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendrierRecord {
    #[serde(default)]
    pub lundi: bool,
    #[serde(default)]
    pub mardi: bool,
    #[serde(default)]
    pub mercredi: bool,
    #[serde(default)]
    pub jeudi: bool,
    #[serde(default)]
    pub vendredi: bool,
    #[serde(default)]
    pub samedi: bool,
    #[serde(default)]
    pub dimanche: bool,
}

/// A service record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    /// Backend identifier.
    pub id: i64,

    /// Calendar date. Either a bare ISO date or the backend's
    /// noon-anchored "YYYY-MM-DDTHH:MM:SS" form.
    pub date: String,

    /// Service start, "HH:MM".
    pub heure_debut: String,

    /// Service end, "HH:MM".
    pub heure_fin: String,

    /// Lifecycle status ("Planifiée", "Terminée").
    pub statut: Option<String>,

    /// Assigned driver, if any.
    pub conducteur_id: Option<i64>,

    /// Owning line.
    pub ligne_id: Option<i64>,

    /// Direction grouping under the line.
    pub sens_id: Option<i64>,
}

/// A driver ("conducteur") record.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConducteurRecord {
    /// Backend identifier.
    pub id: i64,

    /// Staff number.
    pub matricule: String,

    /// Family name.
    pub nom: String,

    /// Given name.
    pub prenom: String,

    /// Licence category.
    pub permis: Option<String>,

    /// Employment status ("Actif", "En congé", "Inactif").
    pub statut: Option<String>,
}
