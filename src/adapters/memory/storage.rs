//! In-memory object storage for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::ports::{ObjectStorage, StoredObject};

/// Map-backed object storage.
#[derive(Debug, Default)]
pub struct InMemoryObjectStorage {
    objects: Mutex<HashMap<String, (Vec<u8>, Timestamp)>>,
}

impl InMemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStorage for InMemoryObjectStorage {
    async fn list(&self) -> Result<Vec<StoredObject>, DomainError> {
        let objects = self.objects.lock().unwrap();
        let mut listed: Vec<StoredObject> = objects
            .iter()
            .map(|(name, (bytes, uploaded_at))| StoredObject {
                name: name.clone(),
                size: bytes.len() as u64,
                uploaded_at: Some(*uploaded_at),
                url: format!("memory://receipts/{}", name),
            })
            .collect();
        listed.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listed)
    }

    async fn write(
        &self,
        name: &str,
        bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, DomainError> {
        self.objects
            .lock()
            .unwrap()
            .insert(name.to_string(), (bytes, Timestamp::now()));
        Ok(format!("memory://receipts/{}", name))
    }

    async fn delete(&self, name: &str) -> Result<(), DomainError> {
        if self.objects.lock().unwrap().remove(name).is_none() {
            return Err(DomainError::new(
                ErrorCode::RecordNotFound,
                "Object not found",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn write_list_delete_roundtrip() {
        let storage = InMemoryObjectStorage::new();
        let url = storage
            .write("r1.jpg", b"bytes".to_vec(), "image/jpeg")
            .await
            .unwrap();
        assert_eq!(url, "memory://receipts/r1.jpg");

        let listed = storage.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].size, 5);

        storage.delete("r1.jpg").await.unwrap();
        assert!(storage.list().await.unwrap().is_empty());
        assert!(storage.delete("r1.jpg").await.is_err());
    }
}
