//! MemberStatementHandler - One member's full financial statement.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::finance::{summarize, Contribution, Deposit, MemberSummary};
use crate::domain::foundation::{DomainError, ErrorCode, MemberId};
use crate::ports::{ContributionRepository, DepositRepository, MemberRepository};

/// Summary plus the full record lists backing it.
#[derive(Debug, Clone, Serialize)]
pub struct MemberStatement {
    pub summary: MemberSummary,
    pub contributions: Vec<Contribution>,
    pub deposits: Vec<Deposit>,
}

/// Handler for the per-member statement. Same aggregation as one payment
/// report row, plus the underlying records.
pub struct MemberStatementHandler {
    members: Arc<dyn MemberRepository>,
    contributions: Arc<dyn ContributionRepository>,
    deposits: Arc<dyn DepositRepository>,
}

impl MemberStatementHandler {
    pub fn new(
        members: Arc<dyn MemberRepository>,
        contributions: Arc<dyn ContributionRepository>,
        deposits: Arc<dyn DepositRepository>,
    ) -> Self {
        Self {
            members,
            contributions,
            deposits,
        }
    }

    pub async fn handle(&self, member_id: MemberId) -> Result<MemberStatement, DomainError> {
        let member = self
            .members
            .find_by_id(&member_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::MemberNotFound, "Member not found"))?;

        let contributions = self.contributions.list_by_member(&member_id).await?;
        let deposits = self.deposits.list_by_member(&member_id).await?;

        let contribution_refs: Vec<&Contribution> = contributions.iter().collect();
        let deposit_refs: Vec<&Deposit> = deposits.iter().collect();
        let summary = summarize(&member, &contribution_refs, &deposit_refs);

        Ok(MemberStatement {
            summary,
            contributions,
            deposits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryContributionRepository, InMemoryDepositRepository, InMemoryMemberRepository,
    };
    use crate::domain::finance::ContributionStatus;
    use crate::domain::foundation::{BillingPeriod, Money, UserId};
    use crate::domain::member::{Member, MemberProfile};
    use chrono::NaiveDate;

    fn member() -> Member {
        Member::register(MemberProfile {
            name: "Carla Lima".to_string(),
            instrument: "clarinete".to_string(),
            email: "carla@example.com".to_string(),
            city: "Recife".to_string(),
            state: "PE".to_string(),
            phone: "+55 81 97777-0000".to_string(),
            tefa: None,
            terms_version: "2025-01".to_string(),
            terms_accepted: true,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn statement_joins_only_that_members_records() {
        let members = Arc::new(InMemoryMemberRepository::new());
        let contributions = Arc::new(InMemoryContributionRepository::new());
        let deposits = Arc::new(InMemoryDepositRepository::new());

        let m = member();
        members.create(&m).await.unwrap();

        let treasurer = UserId::new("treasurer-1").unwrap();
        let mut paid = Contribution::new(
            m.id,
            BillingPeriod::new(2025, 2).unwrap(),
            Money::from_units(30),
            treasurer.clone(),
        );
        paid.status = ContributionStatus::Paid;
        contributions.create(&paid).await.unwrap();
        // Another member's record must not leak into the statement.
        contributions
            .create(&Contribution::new(
                MemberId::new(),
                BillingPeriod::new(2025, 2).unwrap(),
                Money::from_units(30),
                treasurer.clone(),
            ))
            .await
            .unwrap();

        deposits
            .create(&Deposit::new(
                m.id,
                Money::from_units(30),
                NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
                None,
                None,
                treasurer,
            ))
            .await
            .unwrap();

        let statement = MemberStatementHandler::new(members, contributions, deposits)
            .handle(m.id)
            .await
            .unwrap();

        assert_eq!(statement.contributions.len(), 1);
        assert_eq!(statement.deposits.len(), 1);
        assert_eq!(statement.summary.total_paid, Money::from_units(30));
        assert_eq!(
            statement.summary.last_paid_period,
            Some(BillingPeriod::new(2025, 2).unwrap())
        );
    }

    #[tokio::test]
    async fn unknown_member_is_not_found() {
        let handler = MemberStatementHandler::new(
            Arc::new(InMemoryMemberRepository::new()),
            Arc::new(InMemoryContributionRepository::new()),
            Arc::new(InMemoryDepositRepository::new()),
        );
        let err = handler.handle(MemberId::new()).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::MemberNotFound);
    }
}
