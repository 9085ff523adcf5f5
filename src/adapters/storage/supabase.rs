//! Supabase Storage adapter for receipt files.
//!
//! Implements the `ObjectStorage` port against the Supabase Storage REST
//! API. The bucket is public-read; writes and deletes authenticate with the
//! service key. Provider detail is logged, callers see `StorageError`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::config::StorageConfig;
use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::{ObjectStorage, StoredObject};

/// `ObjectStorage` backed by a Supabase Storage bucket.
pub struct SupabaseStorage {
    client: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: SecretString,
}

impl SupabaseStorage {
    pub fn new(config: &StorageConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
            service_key: config.service_key.clone(),
        }
    }

    fn object_url(&self, name: &str) -> String {
        format!("{}/object/{}/{}", self.base_url, self.bucket, name)
    }

    fn public_url(&self, name: &str) -> String {
        format!("{}/object/public/{}/{}", self.base_url, self.bucket, name)
    }
}

/// Request body for the bucket listing endpoint.
#[derive(Debug, Serialize)]
struct ListRequest {
    prefix: String,
    limit: u32,
    offset: u32,
}

/// One entry from the bucket listing endpoint.
#[derive(Debug, Deserialize)]
struct ListEntry {
    name: String,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    metadata: Option<ListEntryMetadata>,
}

#[derive(Debug, Deserialize)]
struct ListEntryMetadata {
    #[serde(default)]
    size: u64,
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn list(&self) -> Result<Vec<StoredObject>, DomainError> {
        let response = self
            .client
            .post(format!("{}/object/list/{}", self.base_url, self.bucket))
            .bearer_auth(self.service_key.expose_secret())
            .json(&ListRequest {
                prefix: String::new(),
                limit: 1000,
                offset: 0,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "storage list request failed");
                storage_error()
            })?;

        if !response.status().is_success() {
            tracing::error!(status = %response.status(), "storage list rejected");
            return Err(storage_error());
        }

        let entries: Vec<ListEntry> = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "storage list response unreadable");
            storage_error()
        })?;

        Ok(entries
            .into_iter()
            .map(|entry| StoredObject {
                url: self.public_url(&entry.name),
                size: entry.metadata.map(|m| m.size).unwrap_or(0),
                uploaded_at: entry.updated_at.map(Timestamp::from_datetime),
                name: entry.name,
            })
            .collect())
    }

    async fn write(
        &self,
        name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError> {
        let response = self
            .client
            .post(self.object_url(name))
            .bearer_auth(self.service_key.expose_secret())
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, name, "storage upload request failed");
                storage_error()
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(%status, detail, name, "storage upload rejected");
            return Err(storage_error());
        }

        Ok(self.public_url(name))
    }

    async fn delete(&self, name: &str) -> Result<(), DomainError> {
        let response = self
            .client
            .delete(self.object_url(name))
            .bearer_auth(self.service_key.expose_secret())
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, name, "storage delete request failed");
                storage_error()
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(DomainError::new(ErrorCode::RecordNotFound, "Object not found"));
        }
        if !response.status().is_success() {
            tracing::error!(status = %response.status(), name, "storage delete rejected");
            return Err(storage_error());
        }

        Ok(())
    }
}

fn storage_error() -> DomainError {
    DomainError::new(ErrorCode::StorageError, "Storage operation failed")
}
