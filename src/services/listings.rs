use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use crate::models::Contractor;

/// Errors that can occur when loading the contractor listings document
#[derive(Debug, Error)]
pub enum ListingsError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to fetch contractor data.")]
    FetchFailed { status: u16 },

    #[error("Contractor not found.")]
    NotFound,
}

/// Client for the static contractor listings document.
///
/// The directory publishes its listings as a single JSON document that
/// is fetched in full on each search or profile request. Listings are
/// immutable for the lifetime of one request.
pub struct ListingsClient {
    contractors_url: String,
    client: Client,
}

impl ListingsClient {
    pub fn new(contractors_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            contractors_url,
            client,
        }
    }

    /// Fetch the full listing set.
    pub async fn fetch_all(&self) -> Result<Vec<Contractor>, ListingsError> {
        tracing::debug!("Fetching contractor listings from: {}", self.contractors_url);

        let response = self.client.get(&self.contractors_url).send().await?;

        if !response.status().is_success() {
            return Err(ListingsError::FetchFailed {
                status: response.status().as_u16(),
            });
        }

        let contractors: Vec<Contractor> = response.json().await?;

        tracing::debug!("Fetched {} contractor listings", contractors.len());

        Ok(contractors)
    }

    /// Fetch a single contractor by id.
    pub async fn get(&self, contractor_id: &str) -> Result<Contractor, ListingsError> {
        let contractors = self.fetch_all().await?;

        contractors
            .into_iter()
            .find(|c| c.id == contractor_id)
            .ok_or(ListingsError::NotFound)
    }
}
