//! Expense records - money spent by the association.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ExpenseId, Money, Timestamp, UserId};

/// An expense, independent of any member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Money,
    pub expense_date: NaiveDate,
    pub category: String,
    pub created_by: UserId,
    pub created_at: Timestamp,
    pub updated_by: Option<UserId>,
    pub updated_at: Option<Timestamp>,
}

impl Expense {
    pub fn new(
        description: String,
        amount: Money,
        expense_date: NaiveDate,
        category: String,
        created_by: UserId,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description,
            amount,
            expense_date,
            category,
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
