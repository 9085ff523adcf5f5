//! JSON DTOs for finance endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::handlers::reports::MemberStatement;
use crate::domain::finance::{Contribution, ContributionStatus, Deposit, Expense, MemberSummary};
use crate::domain::foundation::{BillingPeriod, DomainError, Money, PeriodFilter};
use crate::ports::StoredObject;

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create a contribution.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateContributionRequest {
    pub member_id: String,
    pub year: i32,
    pub month: u32,
    pub amount: Decimal,
}

/// Partial contribution edit. `year` and `month` must come together.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateContributionRequest {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub amount: Option<Decimal>,
    pub status: Option<ContributionStatus>,
}

/// Request to create a deposit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDepositRequest {
    pub member_id: String,
    pub amount: Decimal,
    pub deposit_date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub receipt_url: Option<String>,
}

/// Partial deposit edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDepositRequest {
    pub amount: Option<Decimal>,
    pub deposit_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub receipt_url: Option<String>,
}

/// Request to create an expense.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateExpenseRequest {
    pub description: String,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    #[serde(default)]
    pub category: String,
}

/// Partial expense edit.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateExpenseRequest {
    pub description: Option<String>,
    pub amount: Option<Decimal>,
    pub expense_date: Option<NaiveDate>,
    pub category: Option<String>,
}

/// Query string for period-scoped listings and the payment report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PeriodQuery {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

impl From<PeriodQuery> for PeriodFilter {
    fn from(query: PeriodQuery) -> Self {
        PeriodFilter {
            year: query.year,
            month: query.month,
        }
    }
}

/// Parses a request amount into `Money`, rejecting negatives.
pub fn parse_amount(amount: Decimal) -> Result<Money, DomainError> {
    Money::new(amount).map_err(DomainError::from)
}

/// Parses a request period, validating the month range.
pub fn parse_period(year: i32, month: u32) -> Result<BillingPeriod, DomainError> {
    BillingPeriod::new(year, month).map_err(DomainError::from)
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// One contribution record.
#[derive(Debug, Clone, Serialize)]
pub struct ContributionResponse {
    pub id: String,
    pub member_id: String,
    pub year: i32,
    pub month: u32,
    pub amount: Decimal,
    pub status: ContributionStatus,
    pub created_by: String,
    pub created_at: String,
    pub updated_by: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Contribution> for ContributionResponse {
    fn from(c: Contribution) -> Self {
        Self {
            id: c.id.to_string(),
            member_id: c.member_id.to_string(),
            year: c.period.year,
            month: c.period.month,
            amount: c.amount.as_decimal(),
            status: c.status,
            created_by: c.created_by.as_str().to_string(),
            created_at: c.created_at.to_string(),
            updated_by: c.updated_by.map(|u| u.as_str().to_string()),
            updated_at: c.updated_at.map(|t| t.to_string()),
        }
    }
}

/// One deposit record.
#[derive(Debug, Clone, Serialize)]
pub struct DepositResponse {
    pub id: String,
    pub member_id: String,
    pub amount: Decimal,
    pub deposit_date: NaiveDate,
    pub description: Option<String>,
    pub receipt_url: Option<String>,
    pub created_by: String,
    pub created_at: String,
    pub updated_by: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Deposit> for DepositResponse {
    fn from(d: Deposit) -> Self {
        Self {
            id: d.id.to_string(),
            member_id: d.member_id.to_string(),
            amount: d.amount.as_decimal(),
            deposit_date: d.deposit_date,
            description: d.description,
            receipt_url: d.receipt_url,
            created_by: d.created_by.as_str().to_string(),
            created_at: d.created_at.to_string(),
            updated_by: d.updated_by.map(|u| u.as_str().to_string()),
            updated_at: d.updated_at.map(|t| t.to_string()),
        }
    }
}

/// One expense record.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseResponse {
    pub id: String,
    pub description: String,
    pub amount: Decimal,
    pub expense_date: NaiveDate,
    pub category: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_by: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Expense> for ExpenseResponse {
    fn from(e: Expense) -> Self {
        Self {
            id: e.id.to_string(),
            description: e.description,
            amount: e.amount.as_decimal(),
            expense_date: e.expense_date,
            category: e.category,
            created_by: e.created_by.as_str().to_string(),
            created_at: e.created_at.to_string(),
            updated_by: e.updated_by.map(|u| u.as_str().to_string()),
            updated_at: e.updated_at.map(|t| t.to_string()),
        }
    }
}

/// One payment report row.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentReportRowResponse {
    pub member_id: String,
    pub name: String,
    pub instrument: String,
    /// `"month/year"`, or null when no contribution was ever paid.
    pub last_paid_period: Option<String>,
    pub total_paid: Decimal,
    pub total_pending: Decimal,
    pub pending_contributions: u32,
}

impl From<MemberSummary> for PaymentReportRowResponse {
    fn from(row: MemberSummary) -> Self {
        Self {
            member_id: row.member_id.to_string(),
            name: row.name,
            instrument: row.instrument,
            last_paid_period: row.last_paid_period.map(|p| p.to_string()),
            total_paid: row.total_paid.as_decimal(),
            total_pending: row.total_pending.as_decimal(),
            pending_contributions: row.pending_contributions,
        }
    }
}

/// The per-member statement: summary row plus the backing records.
#[derive(Debug, Clone, Serialize)]
pub struct MemberStatementResponse {
    pub summary: PaymentReportRowResponse,
    pub contributions: Vec<ContributionResponse>,
    pub deposits: Vec<DepositResponse>,
}

impl From<MemberStatement> for MemberStatementResponse {
    fn from(statement: MemberStatement) -> Self {
        Self {
            summary: statement.summary.into(),
            contributions: statement
                .contributions
                .into_iter()
                .map(ContributionResponse::from)
                .collect(),
            deposits: statement
                .deposits
                .into_iter()
                .map(DepositResponse::from)
                .collect(),
        }
    }
}

/// One stored receipt file.
#[derive(Debug, Clone, Serialize)]
pub struct ReceiptResponse {
    pub name: String,
    pub size: u64,
    pub uploaded_at: Option<String>,
    pub url: String,
}

impl From<StoredObject> for ReceiptResponse {
    fn from(object: StoredObject) -> Self {
        Self {
            name: object.name,
            size: object.size,
            uploaded_at: object.uploaded_at.map(|t| t.to_string()),
            url: object.url,
        }
    }
}

/// Response for a successful receipt upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadReceiptResponse {
    pub url: String,
}
