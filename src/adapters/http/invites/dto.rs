//! JSON DTOs for invite key endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::invite::InviteKey;

/// Request to register a new invite key.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterKeyRequest {
    pub key: String,
}

/// One invite key record.
#[derive(Debug, Clone, Serialize)]
pub struct InviteKeyResponse {
    pub key: String,
    pub consumed: bool,
    pub issued_by: String,
    pub consumed_by: Option<String>,
    pub consumed_at: Option<String>,
    pub created_at: String,
}

impl From<InviteKey> for InviteKeyResponse {
    fn from(key: InviteKey) -> Self {
        Self {
            key: key.key,
            consumed: key.consumed,
            issued_by: key.issued_by.as_str().to_string(),
            consumed_by: key.consumed_by.map(|u| u.as_str().to_string()),
            consumed_at: key.consumed_at.map(|t| t.to_string()),
            created_at: key.created_at.to_string(),
        }
    }
}
