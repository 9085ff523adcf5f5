//! Receipt file use cases over the object storage port.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ValidationError};
use crate::ports::{ObjectStorage, StoredObject};

/// Request to store a receipt file.
#[derive(Debug, Clone)]
pub struct UploadReceiptCommand {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Handler for receipt uploads. Returns the public URL to attach to a
/// deposit's `receipt_url`.
pub struct UploadReceiptHandler {
    storage: Arc<dyn ObjectStorage>,
}

impl UploadReceiptHandler {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, command: UploadReceiptCommand) -> Result<String, DomainError> {
        if command.file_name.trim().is_empty() {
            return Err(ValidationError::empty_field("file_name").into());
        }
        if command.bytes.is_empty() {
            return Err(ValidationError::empty_field("file").into());
        }
        self.storage
            .write(&command.file_name, command.bytes, &command.content_type)
            .await
    }
}

/// Handler for the receipt listing.
pub struct ListReceiptsHandler {
    storage: Arc<dyn ObjectStorage>,
}

impl ListReceiptsHandler {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self) -> Result<Vec<StoredObject>, DomainError> {
        self.storage.list().await
    }
}

/// Handler for receipt deletion.
pub struct DeleteReceiptHandler {
    storage: Arc<dyn ObjectStorage>,
}

impl DeleteReceiptHandler {
    pub fn new(storage: Arc<dyn ObjectStorage>) -> Self {
        Self { storage }
    }

    pub async fn handle(&self, name: &str) -> Result<(), DomainError> {
        self.storage.delete(name).await
    }
}
