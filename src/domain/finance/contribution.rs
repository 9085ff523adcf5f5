//! Contribution records - expected recurring payment obligations.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    BillingPeriod, ContributionId, MemberId, Money, Timestamp, UserId,
};

/// Payment status of a contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionStatus {
    Pending,
    Paid,
}

/// One expected payment for a member and billing period.
///
/// The store does not enforce one record per member per period; the report
/// engine tolerates duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: ContributionId,
    pub member_id: MemberId,
    pub period: BillingPeriod,
    pub amount: Money,
    pub status: ContributionStatus,
    pub created_by: UserId,
    pub created_at: Timestamp,
    pub updated_by: Option<UserId>,
    pub updated_at: Option<Timestamp>,
}

impl Contribution {
    /// Creates a new contribution, defaulting to `Pending`.
    pub fn new(
        member_id: MemberId,
        period: BillingPeriod,
        amount: Money,
        created_by: UserId,
    ) -> Self {
        Self {
            id: ContributionId::new(),
            member_id,
            period,
            amount,
            status: ContributionStatus::Pending,
            created_by,
            created_at: Timestamp::now(),
            updated_by: None,
            updated_at: None,
        }
    }

    /// Stamps the editor and time of the latest mutation.
    pub fn touch(&mut self, updated_by: UserId) {
        self.updated_by = Some(updated_by);
        self.updated_at = Some(Timestamp::now());
    }
}
