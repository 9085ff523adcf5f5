//! Payment report engine.
//!
//! Joins the member registry with the contribution and deposit ledgers in
//! memory to produce one summary row per member. The three inputs come from
//! independent reads with no transaction; the join groups by member ID and
//! has no ordering requirement on its inputs.

use std::collections::HashMap;

use serde::Serialize;

use crate::domain::foundation::{BillingPeriod, MemberId, Money};
use crate::domain::member::Member;

use super::{Contribution, ContributionStatus, Deposit};

/// Per-member payment status summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberSummary {
    pub member_id: MemberId,
    pub name: String,
    pub instrument: String,
    /// Most recent period with a paid contribution, year-major; `None` if the
    /// member has never had a contribution marked paid.
    pub last_paid_period: Option<BillingPeriod>,
    /// Sum of the member's deposit amounts. Deposits are the ledger of money
    /// actually received, independent of contribution status.
    pub total_paid: Money,
    /// Sum of the member's pending contribution amounts.
    pub total_pending: Money,
    /// Number of pending contributions.
    pub pending_contributions: u32,
}

/// Builds the payment report: one row per member, zero-filled when the member
/// has no financial activity.
///
/// Contributions are expected to be pre-filtered by period where the caller
/// asked for one; duplicates per member/period are tolerated and simply
/// aggregated.
pub fn build_payment_report(
    members: &[Member],
    contributions: &[Contribution],
    deposits: &[Deposit],
) -> Vec<MemberSummary> {
    let mut contributions_by_member: HashMap<MemberId, Vec<&Contribution>> = HashMap::new();
    for contribution in contributions {
        contributions_by_member
            .entry(contribution.member_id)
            .or_default()
            .push(contribution);
    }

    let mut deposits_by_member: HashMap<MemberId, Vec<&Deposit>> = HashMap::new();
    for deposit in deposits {
        deposits_by_member
            .entry(deposit.member_id)
            .or_default()
            .push(deposit);
    }

    members
        .iter()
        .map(|member| {
            let member_contributions = contributions_by_member
                .get(&member.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            let member_deposits = deposits_by_member
                .get(&member.id)
                .map(Vec::as_slice)
                .unwrap_or_default();

            summarize(member, member_contributions, member_deposits)
        })
        .collect()
}

/// Builds the summary for a single member from that member's records only.
///
/// Backs the per-member statement endpoint; `build_payment_report` uses the
/// same aggregation per row.
pub fn summarize(
    member: &Member,
    contributions: &[&Contribution],
    deposits: &[&Deposit],
) -> MemberSummary {
    let last_paid_period = contributions
        .iter()
        .filter(|c| c.status == ContributionStatus::Paid)
        .map(|c| c.period)
        .max();

    let total_paid: Money = deposits.iter().map(|d| d.amount).sum();

    let pending: Vec<&&Contribution> = contributions
        .iter()
        .filter(|c| c.status == ContributionStatus::Pending)
        .collect();
    let total_pending: Money = pending.iter().map(|c| c.amount).sum();

    MemberSummary {
        member_id: member.id,
        name: member.name.clone(),
        instrument: member.instrument.clone(),
        last_paid_period,
        total_paid,
        total_pending,
        pending_contributions: pending.len() as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::domain::member::MemberProfile;
    use proptest::prelude::*;

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

    fn contribution(
        member_id: MemberId,
        year: i32,
        month: u32,
        amount: i64,
        status: ContributionStatus,
    ) -> Contribution {
        let mut c = Contribution::new(
            member_id,
            BillingPeriod::new(year, month).unwrap(),
            Money::from_units(amount),
            treasurer(),
        );
        c.status = status;
        c
    }

    fn deposit(member_id: MemberId, amount: i64) -> Deposit {
        Deposit::new(
            member_id,
            Money::from_units(amount),
            chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            None,
            None,
            treasurer(),
        )
    }

    #[test]
    fn last_paid_period_picks_greatest_year_then_month() {
        let m = member("Ana");
        let contributions = vec![
            contribution(m.id, 2025, 1, 30, ContributionStatus::Paid),
            contribution(m.id, 2025, 3, 30, ContributionStatus::Paid),
            contribution(m.id, 2025, 2, 30, ContributionStatus::Pending),
        ];

        let report = build_payment_report(&[m], &contributions, &[]);
        let row = &report[0];

        assert_eq!(row.last_paid_period.unwrap().to_string(), "3/2025");
        assert_eq!(row.total_pending, Money::from_units(30));
        assert_eq!(row.pending_contributions, 1);
    }

    #[test]
    fn paid_in_later_year_beats_later_month_in_earlier_year() {
        let m = member("Bruno");
        let contributions = vec![
            contribution(m.id, 2024, 12, 30, ContributionStatus::Paid),
            contribution(m.id, 2025, 1, 30, ContributionStatus::Paid),
        ];

        let report = build_payment_report(&[m], &contributions, &[]);
        assert_eq!(report[0].last_paid_period.unwrap().to_string(), "1/2025");
    }

    #[test]
    fn total_paid_sums_deposits_not_contributions() {
        let m = member("Clara");
        let contributions = vec![contribution(m.id, 2025, 1, 100, ContributionStatus::Paid)];
        let deposits = vec![deposit(m.id, 30), deposit(m.id, 45)];

        let report = build_payment_report(&[m], &contributions, &deposits);
        assert_eq!(report[0].total_paid, Money::from_units(75));
    }

    #[test]
    fn members_without_activity_get_zero_filled_rows() {
        let a = member("Ana");
        let b = member("Bruno");
        let contributions = vec![contribution(a.id, 2025, 1, 30, ContributionStatus::Pending)];

        let report = build_payment_report(&[a.clone(), b.clone()], &contributions, &[]);
        assert_eq!(report.len(), 2);

        let row_b = report.iter().find(|r| r.member_id == b.id).unwrap();
        assert_eq!(row_b.total_paid, Money::ZERO);
        assert_eq!(row_b.total_pending, Money::ZERO);
        assert_eq!(row_b.pending_contributions, 0);
        assert!(row_b.last_paid_period.is_none());
    }

    #[test]
    fn tolerates_duplicate_contributions_for_same_period() {
        let m = member("Davi");
        let contributions = vec![
            contribution(m.id, 2025, 2, 30, ContributionStatus::Pending),
            contribution(m.id, 2025, 2, 30, ContributionStatus::Pending),
        ];

        let report = build_payment_report(&[m], &contributions, &[]);
        assert_eq!(report[0].pending_contributions, 2);
        assert_eq!(report[0].total_pending, Money::from_units(60));
    }

    #[test]
    fn deposits_of_other_members_are_not_counted() {
        let a = member("Ana");
        let b = member("Bruno");
        let deposits = vec![deposit(a.id, 30), deposit(b.id, 99)];

        let report = build_payment_report(&[a.clone()], &[], &deposits);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].total_paid, Money::from_units(30));
    }

    #[test]
    fn report_ignores_input_ordering() {
        let m = member("Eva");
        let mut contributions = vec![
            contribution(m.id, 2025, 3, 30, ContributionStatus::Paid),
            contribution(m.id, 2024, 7, 30, ContributionStatus::Paid),
            contribution(m.id, 2025, 1, 30, ContributionStatus::Paid),
        ];
        let forward = build_payment_report(&[m.clone()], &contributions, &[]);
        contributions.reverse();
        let reversed = build_payment_report(&[m], &contributions, &[]);
        assert_eq!(forward, reversed);
    }

    proptest! {
        /// total_paid equals the deposit sum no matter what the contribution
        /// set looks like.
        #[test]
        fn total_paid_is_deposit_sum(
            deposit_amounts in proptest::collection::vec(0i64..10_000, 0..20),
            paid_flags in proptest::collection::vec(any::<bool>(), 0..20),
        ) {
            let m = member("Prop");
            let deposits: Vec<Deposit> = deposit_amounts
                .iter()
                .map(|&a| deposit(m.id, a))
                .collect();
            let contributions: Vec<Contribution> = paid_flags
                .iter()
                .enumerate()
                .map(|(i, &paid)| {
                    let status = if paid {
                        ContributionStatus::Paid
                    } else {
                        ContributionStatus::Pending
                    };
                    contribution(m.id, 2025, (i as u32 % 12) + 1, 30, status)
                })
                .collect();

            let report = build_payment_report(&[m], &contributions, &deposits);
            let expected: Money = deposit_amounts.iter().map(|&a| Money::from_units(a)).sum();
            prop_assert_eq!(report[0].total_paid, expected);
        }
    }
}
