//! RegisterKeyHandler - Registers a new invite key.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::invite::InviteKey;
use crate::ports::InviteKeyRepository;

/// Request to register a fresh invite key.
#[derive(Debug, Clone)]
pub struct RegisterKeyCommand {
    pub key: String,
    pub issued_by: UserId,
}

/// Handler for invite key registration.
///
/// Saving an already-registered key overwrites it, resetting it to
/// unconsumed. That is the store's upsert semantics; admins are trusted not
/// to recycle keys.
pub struct RegisterKeyHandler {
    invites: Arc<dyn InviteKeyRepository>,
}

impl RegisterKeyHandler {
    pub fn new(invites: Arc<dyn InviteKeyRepository>) -> Self {
        Self { invites }
    }

    pub async fn handle(&self, command: RegisterKeyCommand) -> Result<InviteKey, DomainError> {
        let key = InviteKey::register(command.key, command.issued_by)?;
        self.invites.save(&key).await?;
        Ok(key)
    }
}
