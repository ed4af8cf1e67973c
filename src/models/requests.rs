use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for the contractor search endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Service type id, e.g. "electricians"
    pub service: String,
    /// Region id, e.g. "hannibal"
    pub service_area: String,
    /// Optional case-insensitive business name filter
    pub name: Option<String>,
}

/// Request to assign the nearest service region to a coordinate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignRegionRequest {
    pub lat: f64,
    pub lon: f64,
}

/// One portfolio image attached to a listing application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUpload {
    #[serde(alias = "file_name", rename = "fileName")]
    pub file_name: String,
    #[serde(
        alias = "content_type",
        rename = "contentType",
        default = "default_content_type"
    )]
    pub content_type: String,
    /// Base64-encoded file body
    pub data: String,
}

fn default_content_type() -> String {
    "application/octet-stream".to_string()
}

/// Request to submit a listing application
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitApplicationRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    #[serde(alias = "contact_name", rename = "contactName")]
    pub contact_name: String,
    /// Service type ids the business offers
    #[serde(default)]
    pub services: Vec<String>,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    /// Region names the business serves
    #[serde(default, alias = "service_areas", rename = "serviceAreas")]
    pub service_areas: Vec<String>,
    #[validate(length(min = 1))]
    pub description: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(alias = "years_experience", rename = "yearsExperience")]
    pub years_experience: u32,
    #[serde(alias = "completed_projects", rename = "completedProjects")]
    pub completed_projects: u32,
    #[serde(default)]
    pub licensed: bool,
    #[serde(default)]
    pub insured: bool,
    #[serde(default, alias = "specialized_training", rename = "specializedTraining")]
    pub specialized_training: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImageUpload>,
}
