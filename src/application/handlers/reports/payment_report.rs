//! PaymentReportHandler - Per-member payment status report.

use std::sync::Arc;

use crate::domain::finance::{build_payment_report, MemberSummary};
use crate::domain::foundation::{DomainError, PeriodFilter};
use crate::ports::{ContributionRepository, DepositRepository, MemberRepository};

/// Report request with optional period scoping of contributions.
#[derive(Debug, Clone, Default)]
pub struct PaymentReportQuery {
    pub filter: PeriodFilter,
}

/// Handler for the payment report.
///
/// Reads the member registry, the (optionally period-filtered) contribution
/// ledger, and the full deposit ledger, then joins them in memory. The three
/// reads are independent, with no cross-collection transaction; the report
/// is a best-effort snapshot.
pub struct PaymentReportHandler {
    members: Arc<dyn MemberRepository>,
    contributions: Arc<dyn ContributionRepository>,
    deposits: Arc<dyn DepositRepository>,
}

impl PaymentReportHandler {
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

    pub async fn handle(&self, query: PaymentReportQuery) -> Result<Vec<MemberSummary>, DomainError> {
        let members = self.members.list().await?;
        let contributions = self.contributions.list(query.filter).await?;
        let deposits = self.deposits.list().await?;

        Ok(build_payment_report(&members, &contributions, &deposits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{
        InMemoryContributionRepository, InMemoryDepositRepository, InMemoryMemberRepository,
    };
    use crate::domain::finance::{Contribution, ContributionStatus, Deposit};
    use crate::domain::foundation::{BillingPeriod, Money, UserId};
    use crate::domain::member::{Member, MemberProfile};
    use chrono::NaiveDate;

    fn member(name: &str) -> Member {
        Member::register(MemberProfile {
            name: name.to_string(),
            instrument: "tuba".to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            city: "Olinda".to_string(),
            state: "PE".to_string(),
            phone: "+55 81 98888-0000".to_string(),
            tefa: None,
            terms_version: "2025-01".to_string(),
            terms_accepted: true,
        })
        .unwrap()
    }

    fn treasurer() -> UserId {
        UserId::new("treasurer-1").unwrap()
    }

    #[tokio::test]
    async fn report_has_one_row_per_member_including_inactive() {
        let members = Arc::new(InMemoryMemberRepository::new());
        let contributions = Arc::new(InMemoryContributionRepository::new());
        let deposits = Arc::new(InMemoryDepositRepository::new());

        let active = member("Ana");
        let inactive = member("Bia");
        members.create(&active).await.unwrap();
        members.create(&inactive).await.unwrap();

        let mut paid = Contribution::new(
            active.id,
            BillingPeriod::new(2025, 3).unwrap(),
            Money::from_units(30),
            treasurer(),
        );
        paid.status = ContributionStatus::Paid;
        contributions.create(&paid).await.unwrap();

        deposits
            .create(&Deposit::new(
                active.id,
                Money::from_units(30),
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
                None,
                None,
                treasurer(),
            ))
            .await
            .unwrap();

        let report = PaymentReportHandler::new(members, contributions, deposits)
            .handle(PaymentReportQuery::default())
            .await
            .unwrap();

        assert_eq!(report.len(), 2);
        let ana = report.iter().find(|r| r.name == "Ana").unwrap();
        assert_eq!(ana.total_paid, Money::from_units(30));
        assert_eq!(ana.last_paid_period, Some(BillingPeriod::new(2025, 3).unwrap()));

        let bia = report.iter().find(|r| r.name == "Bia").unwrap();
        assert_eq!(bia.total_paid, Money::ZERO);
        assert_eq!(bia.pending_contributions, 0);
        assert!(bia.last_paid_period.is_none());
    }

    #[tokio::test]
    async fn period_filter_scopes_contributions_but_not_deposits() {
        let members = Arc::new(InMemoryMemberRepository::new());
        let contributions = Arc::new(InMemoryContributionRepository::new());
        let deposits = Arc::new(InMemoryDepositRepository::new());

        let m = member("Ana");
        members.create(&m).await.unwrap();

        for (y, mth) in [(2025, 3), (2024, 12)] {
            contributions
                .create(&Contribution::new(
                    m.id,
                    BillingPeriod::new(y, mth).unwrap(),
                    Money::from_units(30),
                    treasurer(),
                ))
                .await
                .unwrap();
        }
        deposits
            .create(&Deposit::new(
                m.id,
                Money::from_units(30),
                NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
                None,
                None,
                treasurer(),
            ))
            .await
            .unwrap();

        let report = PaymentReportHandler::new(members, contributions, deposits)
            .handle(PaymentReportQuery {
                filter: PeriodFilter {
                    year: Some(2025),
                    month: Some(3),
                },
            })
            .await
            .unwrap();

        let row = &report[0];
        // Only the March 2025 pending contribution counts, but deposits are
        // not period-scoped.
        assert_eq!(row.pending_contributions, 1);
        assert_eq!(row.total_paid, Money::from_units(30));
    }
}
