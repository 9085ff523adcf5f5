//! ListKeysHandler - Lists registered invite keys.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::invite::InviteKey;
use crate::ports::InviteKeyRepository;

/// Handler for the invite key listing, newest first. Master keys live in
/// configuration and never appear here.
pub struct ListKeysHandler {
    invites: Arc<dyn InviteKeyRepository>,
}

impl ListKeysHandler {
    pub fn new(invites: Arc<dyn InviteKeyRepository>) -> Self {
        Self { invites }
    }

    pub async fn handle(&self) -> Result<Vec<InviteKey>, DomainError> {
        self.invites.list().await
    }
}
