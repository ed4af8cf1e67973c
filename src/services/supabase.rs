use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use futures::future::try_join_all;
use reqwest::Client;
use thiserror::Error;

use crate::models::{ContractorApplication, ImageUpload};

/// Errors that can occur when interacting with the Supabase backend
#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid image payload: {0}")]
    InvalidImage(String),
}

/// Supabase REST client.
///
/// Handles the two write paths of a listing submission:
/// - uploading portfolio images to the storage bucket
/// - inserting the application row
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    bucket: String,
    client: Client,
}

impl SupabaseClient {
    pub fn new(base_url: String, api_key: String, bucket: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            bucket,
            client,
        }
    }

    /// Insert one application row with status "pending".
    pub async fn insert_application(
        &self,
        application: &ContractorApplication,
    ) -> Result<(), SupabaseError> {
        let url = format!(
            "{}/rest/v1/contractor_applications",
            self.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Prefer", "return=minimal")
            .json(&[application])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Application insert failed: {} - {}", status, body);
            return Err(SupabaseError::ApiError(format!(
                "Failed to insert application: {}",
                status
            )));
        }

        tracing::debug!("Inserted application for {}", application.name);

        Ok(())
    }

    /// Upload a batch of images concurrently, returning their public
    /// URLs in input order. Any single failed upload fails the batch.
    pub async fn upload_images(
        &self,
        images: &[ImageUpload],
    ) -> Result<Vec<String>, SupabaseError> {
        try_join_all(images.iter().map(|image| self.upload_image(image))).await
    }

    /// Upload one image to the storage bucket and return its public URL.
    pub async fn upload_image(&self, image: &ImageUpload) -> Result<String, SupabaseError> {
        let bytes = BASE64
            .decode(image.data.as_bytes())
            .map_err(|e| SupabaseError::InvalidImage(e.to_string()))?;

        let path = self.object_path(&image.file_name);
        let url = format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.bucket,
            path
        );

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", &image.content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Image upload failed: {} - {}", status, body);
            return Err(SupabaseError::ApiError(format!(
                "Failed to upload an image: {}",
                status
            )));
        }

        Ok(self.public_url(&path))
    }

    /// Generated object path for an uploaded image. The original file
    /// name only contributes its extension; the rest is a fresh UUID.
    fn object_path(&self, file_name: &str) -> String {
        let ext = file_name.rsplit('.').next().unwrap_or("bin");
        format!("contractor-images/{}.{}", uuid::Uuid::new_v4(), urlencoding::encode(ext))
    }

    /// Public URL for an object in the storage bucket.
    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.bucket,
            path
        )
    }
}
