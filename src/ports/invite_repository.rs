//! Invite key repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, Timestamp, UserId};
use crate::domain::invite::InviteKey;

/// Persistence for single-use invite keys.
///
/// Consumption is an atomic conditional update, not a read-then-write: the
/// store flips `consumed` only if it is currently false and reports whether a
/// row transitioned. Two concurrent redeemers of the same key therefore get
/// at most one successful consume.
#[async_trait]
pub trait InviteKeyRepository: Send + Sync {
    /// Finds a key record. Returns `None` for unregistered keys.
    async fn find(&self, key: &str) -> Result<Option<InviteKey>, DomainError>;

    /// Saves a key record. Upserts: re-registering an existing key silently
    /// overwrites it (accepted looseness, see the invite domain docs).
    async fn save(&self, key: &InviteKey) -> Result<(), DomainError>;

    /// Marks the key consumed if, and only if, it is currently unconsumed.
    ///
    /// Returns `true` when this call performed the transition, `false` when
    /// the key was already consumed (or disappeared) by the time the write
    /// landed.
    async fn consume_if_unconsumed(
        &self,
        key: &str,
        consumed_by: &UserId,
        consumed_at: Timestamp,
    ) -> Result<bool, DomainError>;

    /// Lists every registered key, newest first.
    async fn list(&self) -> Result<Vec<InviteKey>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invite_key_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn InviteKeyRepository) {}
    }
}
