use serde::{Deserialize, Serialize};

use crate::catalog::Region;
use crate::models::domain::Contractor;

/// Response for the contractor search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub contractors: Vec<Contractor>,
    pub total_results: usize,
}

/// Response for the region assignment endpoint
#[derive(Debug, Clone, Serialize)]
pub struct AssignRegionResponse {
    pub region: Region,
    pub distance_km: f64,
}

/// Response for a successful listing submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationSubmittedResponse {
    pub success: bool,
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Failure body for the notification hook. The hook's contract is a
/// bare `{ "error": ... }` object rather than the richer ErrorResponse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationError {
    pub error: String,
}
