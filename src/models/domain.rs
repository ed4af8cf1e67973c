use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A published contractor listing, as it appears in the static
/// listings document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contractor {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub contractor_type: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub location: String,
    /// Region names this contractor serves. A contractor with an empty
    /// service area is never returned by a search.
    #[serde(default)]
    pub service_area: Vec<String>,
    #[serde(default)]
    pub sub_types: Vec<String>,
    #[serde(default)]
    pub image_url: String,
}

/// Review state of a submitted listing application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

/// Row written to the `contractor_applications` table for a new
/// listing submission. The id and timestamps are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractorApplication {
    pub name: String,
    pub contact_name: String,
    pub services: Vec<String>,
    pub phone: String,
    pub email: String,
    pub website: Option<String>,
    pub service_areas: Vec<String>,
    pub description: String,
    pub specialties: Vec<String>,
    pub years_experience: u32,
    pub completed_projects: u32,
    pub licensed: bool,
    pub insured: bool,
    pub specialized_training: Vec<String>,
    pub image_urls: Option<Vec<String>>,
    pub status: ApplicationStatus,
    pub nemo_certified: bool,
}

/// The slice of an application row the new-application notification
/// needs. The trigger payload carries the full row; extra columns are
/// ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationRecord {
    pub name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub service_areas: Vec<String>,
}
