//! PostgreSQL implementation of DepositRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::finance::Deposit;
use crate::domain::foundation::{
    DepositId, DomainError, ErrorCode, MemberId, Money, Timestamp, UserId,
};
use crate::ports::DepositRepository;

/// PostgreSQL implementation of the DepositRepository port.
pub struct PostgresDepositRepository {
    pool: PgPool,
}

impl PostgresDepositRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a deposit.
#[derive(Debug, sqlx::FromRow)]
struct DepositRow {
    id: Uuid,
    member_id: Uuid,
    amount: Decimal,
    deposit_date: NaiveDate,
    description: Option<String>,
    receipt_url: Option<String>,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_by: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<DepositRow> for Deposit {
    type Error = DomainError;

    fn try_from(row: DepositRow) -> Result<Self, Self::Error> {
        let amount = Money::new(row.amount)
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid amount: {}", e)))?;

        Ok(Deposit {
            id: DepositId::from_uuid(row.id),
            member_id: MemberId::from_uuid(row.member_id),
            amount,
            deposit_date: row.deposit_date,
            description: row.description,
            receipt_url: row.receipt_url,
            created_by: parse_user_id(row.created_by)?,
            created_at: Timestamp::from_datetime(row.created_at),
            updated_by: row.updated_by.map(parse_user_id).transpose()?,
            updated_at: row.updated_at.map(Timestamp::from_datetime),
        })
    }
}

fn parse_user_id(s: String) -> Result<UserId, DomainError> {
    UserId::new(s).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
    })
}

const SELECT_COLUMNS: &str = "id, member_id, amount, deposit_date, description, receipt_url, \
     created_by, created_at, updated_by, updated_at";

#[async_trait]
impl DepositRepository for PostgresDepositRepository {
    async fn create(&self, deposit: &Deposit) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO deposits (
                id, member_id, amount, deposit_date, description, receipt_url,
                created_by, created_at, updated_by, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(deposit.id.as_uuid())
        .bind(deposit.member_id.as_uuid())
        .bind(deposit.amount.as_decimal())
        .bind(deposit.deposit_date)
        .bind(&deposit.description)
        .bind(&deposit.receipt_url)
        .bind(deposit.created_by.as_str())
        .bind(deposit.created_at.as_datetime())
        .bind(deposit.updated_by.as_ref().map(|u| u.as_str()))
        .bind(deposit.updated_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to create deposit: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, deposit: &Deposit) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE deposits SET
                amount = $2,
                deposit_date = $3,
                description = $4,
                receipt_url = $5,
                updated_by = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(deposit.id.as_uuid())
        .bind(deposit.amount.as_decimal())
        .bind(deposit.deposit_date)
        .bind(&deposit.description)
        .bind(&deposit.receipt_url)
        .bind(deposit.updated_by.as_ref().map(|u| u.as_str()))
        .bind(deposit.updated_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update deposit: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::RecordNotFound, "Deposit not found"));
        }

        Ok(())
    }

    async fn delete(&self, id: &DepositId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM deposits WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete deposit: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::RecordNotFound, "Deposit not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &DepositId) -> Result<Option<Deposit>, DomainError> {
        let row: Option<DepositRow> = sqlx::query_as(&format!(
            "SELECT {} FROM deposits WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find deposit: {}", e))
        })?;

        row.map(Deposit::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Deposit>, DomainError> {
        let rows: Vec<DepositRow> = sqlx::query_as(&format!(
            "SELECT {} FROM deposits ORDER BY deposit_date DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list deposits: {}", e))
        })?;

        rows.into_iter().map(Deposit::try_from).collect()
    }

    async fn list_by_member(&self, member_id: &MemberId) -> Result<Vec<Deposit>, DomainError> {
        let rows: Vec<DepositRow> = sqlx::query_as(&format!(
            "SELECT {} FROM deposits WHERE member_id = $1 ORDER BY deposit_date DESC",
            SELECT_COLUMNS
        ))
        .bind(member_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list deposits: {}", e))
        })?;

        rows.into_iter().map(Deposit::try_from).collect()
    }
}
