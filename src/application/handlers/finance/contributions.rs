//! Contribution ledger use cases.

use std::sync::Arc;

use crate::domain::finance::{Contribution, ContributionStatus};
use crate::domain::foundation::{
    BillingPeriod, ContributionId, DomainError, ErrorCode, MemberId, Money, PeriodFilter, UserId,
};
use crate::ports::ContributionRepository;

/// Request to record an expected payment for a member and period.
#[derive(Debug, Clone)]
pub struct CreateContributionCommand {
    pub member_id: MemberId,
    pub period: BillingPeriod,
    pub amount: Money,
    pub created_by: UserId,
}

/// Handler for contribution creation. New records default to pending; the
/// store does not enforce one record per member per period.
pub struct CreateContributionHandler {
    contributions: Arc<dyn ContributionRepository>,
}

impl CreateContributionHandler {
    pub fn new(contributions: Arc<dyn ContributionRepository>) -> Self {
        Self { contributions }
    }

    pub async fn handle(
        &self,
        command: CreateContributionCommand,
    ) -> Result<Contribution, DomainError> {
        let contribution = Contribution::new(
            command.member_id,
            command.period,
            command.amount,
            command.created_by,
        );
        self.contributions.create(&contribution).await?;
        Ok(contribution)
    }
}

/// Editable contribution fields. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct ContributionPatch {
    pub period: Option<BillingPeriod>,
    pub amount: Option<Money>,
    pub status: Option<ContributionStatus>,
}

/// Request to edit an existing contribution.
#[derive(Debug, Clone)]
pub struct UpdateContributionCommand {
    pub id: ContributionId,
    pub patch: ContributionPatch,
    pub updated_by: UserId,
}

/// Handler for contribution edits. Identity and provenance fields are never
/// client-writable; edits stamp `updated_by`/`updated_at`.
pub struct UpdateContributionHandler {
    contributions: Arc<dyn ContributionRepository>,
}

impl UpdateContributionHandler {
    pub fn new(contributions: Arc<dyn ContributionRepository>) -> Self {
        Self { contributions }
    }

    pub async fn handle(
        &self,
        command: UpdateContributionCommand,
    ) -> Result<Contribution, DomainError> {
        let mut contribution = self
            .contributions
            .find_by_id(&command.id)
            .await?
            .ok_or_else(not_found)?;

        if let Some(period) = command.patch.period {
            contribution.period = period;
        }
        if let Some(amount) = command.patch.amount {
            contribution.amount = amount;
        }
        if let Some(status) = command.patch.status {
            contribution.status = status;
        }
        contribution.touch(command.updated_by);

        self.contributions.update(&contribution).await?;
        Ok(contribution)
    }
}

/// Handler for hard deletion of a contribution.
pub struct DeleteContributionHandler {
    contributions: Arc<dyn ContributionRepository>,
}

impl DeleteContributionHandler {
    pub fn new(contributions: Arc<dyn ContributionRepository>) -> Self {
        Self { contributions }
    }

    pub async fn handle(&self, id: ContributionId) -> Result<(), DomainError> {
        self.contributions.delete(&id).await
    }
}

/// Handler for the contribution listing with optional period filtering.
pub struct ListContributionsHandler {
    contributions: Arc<dyn ContributionRepository>,
}

impl ListContributionsHandler {
    pub fn new(contributions: Arc<dyn ContributionRepository>) -> Self {
        Self { contributions }
    }

    pub async fn handle(&self, filter: PeriodFilter) -> Result<Vec<Contribution>, DomainError> {
        self.contributions.list(filter).await
    }
}

fn not_found() -> DomainError {
    DomainError::new(ErrorCode::RecordNotFound, "Contribution not found")
}
