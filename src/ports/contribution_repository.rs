//! Contribution ledger repository port.

use async_trait::async_trait;

use crate::domain::foundation::{ContributionId, DomainError, MemberId, PeriodFilter};
use crate::domain::finance::Contribution;

/// Persistence for contribution records.
#[async_trait]
pub trait ContributionRepository: Send + Sync {
    /// Persists a new contribution.
    async fn create(&self, contribution: &Contribution) -> Result<(), DomainError>;

    /// Replaces an existing contribution.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the contribution does not exist
    async fn update(&self, contribution: &Contribution) -> Result<(), DomainError>;

    /// Deletes a contribution permanently.
    ///
    /// # Errors
    ///
    /// - `RecordNotFound` if the contribution does not exist
    async fn delete(&self, id: &ContributionId) -> Result<(), DomainError>;

    /// Finds a contribution by ID. Returns `None` if not found.
    async fn find_by_id(&self, id: &ContributionId) -> Result<Option<Contribution>, DomainError>;

    /// Lists contributions matching the period filter, ordered by
    /// (year, month) descending.
    async fn list(&self, filter: PeriodFilter) -> Result<Vec<Contribution>, DomainError>;

    /// Lists every contribution for one member, ordered by (year, month)
    /// descending.
    async fn list_by_member(&self, member_id: &MemberId) -> Result<Vec<Contribution>, DomainError>;
}
