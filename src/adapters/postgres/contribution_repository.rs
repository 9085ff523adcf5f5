//! PostgreSQL implementation of ContributionRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::finance::{Contribution, ContributionStatus};
use crate::domain::foundation::{
    BillingPeriod, ContributionId, DomainError, ErrorCode, MemberId, Money, PeriodFilter,
    Timestamp, UserId,
};
use crate::ports::ContributionRepository;

/// PostgreSQL implementation of the ContributionRepository port.
pub struct PostgresContributionRepository {
    pool: PgPool,
}

impl PostgresContributionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a contribution.
#[derive(Debug, sqlx::FromRow)]
struct ContributionRow {
    id: Uuid,
    member_id: Uuid,
    period_year: i32,
    period_month: i32,
    amount: Decimal,
    status: String,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_by: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ContributionRow> for Contribution {
    type Error = DomainError;

    fn try_from(row: ContributionRow) -> Result<Self, Self::Error> {
        let period = BillingPeriod::new(row.period_year, row.period_month as u32)
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid period: {}", e)))?;
        let amount = Money::new(row.amount)
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid amount: {}", e)))?;

        Ok(Contribution {
            id: ContributionId::from_uuid(row.id),
            member_id: MemberId::from_uuid(row.member_id),
            period,
            amount,
            status: parse_status(&row.status)?,
            created_by: parse_user_id(row.created_by)?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_by: row.updated_by.map(parse_user_id).transpose()?,
            updated_at: row.updated_at.map(Timestamp::from_datetime),
        })
    }
}

fn parse_status(s: &str) -> Result<ContributionStatus, DomainError> {
    match s {
        "pending" => Ok(ContributionStatus::Pending),
        "paid" => Ok(ContributionStatus::Paid),
        _ => Err(DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid status value: {}", s),
        )),
    }
}

fn status_to_string(status: &ContributionStatus) -> &'static str {
    match status {
        ContributionStatus::Pending => "pending",
        ContributionStatus::Paid => "paid",
    }
}

fn parse_user_id(s: String) -> Result<UserId, DomainError> {
    UserId::new(s).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
    })
}

const SELECT_COLUMNS: &str = "id, member_id, period_year, period_month, amount, status, \
     created_by, created_at, updated_by, updated_at";

#[async_trait]
impl ContributionRepository for PostgresContributionRepository {
    async fn create(&self, contribution: &Contribution) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO contributions (
                id, member_id, period_year, period_month, amount, status,
                created_by, created_at, updated_by, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(contribution.id.as_uuid())
        .bind(contribution.member_id.as_uuid())
        .bind(contribution.period.year)
        .bind(contribution.period.month as i32)
        .bind(contribution.amount.as_decimal())
        .bind(status_to_string(&contribution.status))
        .bind(contribution.created_by.as_str())
        .bind(contribution.created_at.as_datetime())
        .bind(contribution.updated_by.as_ref().map(|u| u.as_str()))
        .bind(contribution.updated_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to create contribution: {}", e),
            )
        })?;

        Ok(())
    }

    async fn update(&self, contribution: &Contribution) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE contributions SET
                period_year = $2,
                period_month = $3,
                amount = $4,
                status = $5,
                updated_by = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(contribution.id.as_uuid())
        .bind(contribution.period.year)
        .bind(contribution.period.month as i32)
        .bind(contribution.amount.as_decimal())
        .bind(status_to_string(&contribution.status))
        .bind(contribution.updated_by.as_ref().map(|u| u.as_str()))
        .bind(contribution.updated_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to update contribution: {}", e),
            )
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RecordNotFound,
                "Contribution not found",
            ));
        }

        Ok(())
    }

    async fn delete(&self, id: &ContributionId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM contributions WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete contribution: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::RecordNotFound,
                "Contribution not found",
            ));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ContributionId) -> Result<Option<Contribution>, DomainError> {
        let row: Option<ContributionRow> = sqlx::query_as(&format!(
            "SELECT {} FROM contributions WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to find contribution: {}", e),
            )
        })?;

        row.map(Contribution::try_from).transpose()
    }

    async fn list(&self, filter: PeriodFilter) -> Result<Vec<Contribution>, DomainError> {
        let rows: Vec<ContributionRow> = sqlx::query_as(&format!(
            r#"
            SELECT {}
            FROM contributions
            WHERE ($1::INT IS NULL OR period_year = $1)
              AND ($2::INT IS NULL OR period_month = $2)
            ORDER BY period_year DESC, period_month DESC
            "#,
            SELECT_COLUMNS
        ))
        .bind(filter.year)
        .bind(filter.month.map(|m| m as i32))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list contributions: {}", e),
            )
        })?;

        rows.into_iter().map(Contribution::try_from).collect()
    }

    async fn list_by_member(&self, member_id: &MemberId) -> Result<Vec<Contribution>, DomainError> {
        let rows: Vec<ContributionRow> = sqlx::query_as(&format!(
            r#"
            SELECT {}
            FROM contributions
            WHERE member_id = $1
            ORDER BY period_year DESC, period_month DESC
            "#,
            SELECT_COLUMNS
        ))
        .bind(member_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list contributions: {}", e),
            )
        })?;

        rows.into_iter().map(Contribution::try_from).collect()
    }
}
