//! Object storage port for receipt files.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp};

/// Metadata for a stored object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub name: String,
    pub size: u64,
    pub uploaded_at: Option<Timestamp>,
    pub url: String,
}

/// Narrow interface over the object-storage provider. Provider internals are
/// deliberately out of scope; this is upload/list/delete and nothing else.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Lists stored objects.
    async fn list(&self) -> Result<Vec<StoredObject>, DomainError>;

    /// Writes an object and returns its public URL.
    async fn write(
        &self,
        name: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, DomainError>;

    /// Deletes an object permanently.
    async fn delete(&self, name: &str) -> Result<(), DomainError>;
}
