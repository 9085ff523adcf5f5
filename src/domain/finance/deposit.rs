//! Deposit records - actual payments received, with proof.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DepositId, MemberId, Money, Timestamp, UserId};

/// A payment instrument actually received from a member.
///
/// Deposits, not contributions, are the ledger of money received; report
/// totals sum deposit amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deposit {
    pub id: DepositId,
    pub member_id: MemberId,
    pub amount: Money,
    pub deposit_date: NaiveDate,
    pub description: Option<String>,
    pub receipt_url: Option<String>,
    pub created_by: UserId,
    pub created_at: Timestamp,
    pub updated_by: Option<UserId>,
    pub updated_at: Option<Timestamp>,
}

impl Deposit {
    pub fn new(
        member_id: MemberId,
        amount: Money,
        deposit_date: NaiveDate,
        description: Option<String>,
        receipt_url: Option<String>,
        created_by: UserId,
    ) -> Self {
        Self {
            id: DepositId::new(),
            member_id,
            amount,
            deposit_date,
            description,
            receipt_url,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_deposit_carries_proof_url() {
        let d = Deposit::new(
            MemberId::new(),
            Money::from_units(30),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            Some("March dues".to_string()),
            Some("https://storage.example.com/receipts/r1.jpg".to_string()),
            UserId::new("treasurer-1").unwrap(),
        );
        assert_eq!(d.amount, Money::from_units(30));
        assert!(d.receipt_url.as_deref().unwrap().starts_with("https://"));
    }
}
