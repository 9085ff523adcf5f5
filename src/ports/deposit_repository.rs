//! Deposit ledger repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DepositId, DomainError, MemberId};
use crate::domain::finance::Deposit;

/// Persistence for deposit records.
#[async_trait]
pub trait DepositRepository: Send + Sync {
    /// Persists a new deposit.
    async fn create(&self, deposit: &Deposit) -> Result<(), DomainError>;

    /// Replaces an existing deposit.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the deposit does not exist
    async fn update(&self, deposit: &Deposit) -> Result<(), DomainError>;

    /// Deletes a deposit permanently.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the deposit does not exist
    async fn delete(&self, id: &DepositId) -> Result<(), DomainError>;

    /// Finds a deposit by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &DepositId) -> Result<Option<Deposit>, DomainError>;

    /// Lists all deposits, deposit date descending.
    async fn list(&self) -> Result<Vec<Deposit>, DomainError>;

    /// Lists every deposit for one member, deposit date descending.
    async fn list_by_member(&self, member_id: &MemberId) -> Result<Vec<Deposit>, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deposit_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn DepositRepository) {}
    }
}
