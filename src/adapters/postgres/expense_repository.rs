//! PostgreSQL implementation of ExpenseRepository.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::finance::Expense;
use crate::domain::foundation::{DomainError, ErrorCode, ExpenseId, Money, Timestamp, UserId};
use crate::ports::ExpenseRepository;

/// PostgreSQL implementation of the ExpenseRepository port.
pub struct PostgresExpenseRepository {
    pool: PgPool,
}

impl PostgresExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an expense.
#[derive(Debug, sqlx::FromRow)]
struct ExpenseRow {
    id: Uuid,
    description: String,
    amount: Decimal,
    expense_date: NaiveDate,
    category: String,
    created_by: String,
    created_at: DateTime<Utc>,
    updated_by: Option<String>,
    updated_at: Option<DateTime<Utc>>,
}

impl TryFrom<ExpenseRow> for Expense {
    type Error = DomainError;

    fn try_from(row: ExpenseRow) -> Result<Self, Self::Error> {
        let amount = Money::new(row.amount)
            .map_err(|e| DomainError::new(ErrorCode::DatabaseError, format!("Invalid amount: {}", e)))?;

        Ok(Expense {
            id: ExpenseId::from_uuid(row.id),
            description: row.description,
            amount,
            expense_date: row.expense_date,
            category: row.category,
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

const SELECT_COLUMNS: &str = "id, description, amount, expense_date, category, \
     created_by, created_at, updated_by, updated_at";

#[async_trait]
impl ExpenseRepository for PostgresExpenseRepository {
    async fn create(&self, expense: &Expense) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO expenses (
                id, description, amount, expense_date, category,
                created_by, created_at, updated_by, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(expense.id.as_uuid())
        .bind(&expense.description)
        .bind(expense.amount.as_decimal())
        .bind(expense.expense_date)
        .bind(&expense.category)
        .bind(expense.created_by.as_str())
        .bind(expense.created_at.as_datetime())
        .bind(expense.updated_by.as_ref().map(|u| u.as_str()))
        .bind(expense.updated_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to create expense: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, expense: &Expense) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE expenses SET
                description = $2,
                amount = $3,
                expense_date = $4,
                category = $5,
                updated_by = $6,
                updated_at = $7
            WHERE id = $1
            "#,
        )
        .bind(expense.id.as_uuid())
        .bind(&expense.description)
        .bind(expense.amount.as_decimal())
        .bind(expense.expense_date)
        .bind(&expense.category)
        .bind(expense.updated_by.as_ref().map(|u| u.as_str()))
        .bind(expense.updated_at.map(|t| *t.as_datetime()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update expense: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::RecordNotFound, "Expense not found"));
        }

        Ok(())
    }

    async fn delete(&self, id: &ExpenseId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Failed to delete expense: {}", e),
                )
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::RecordNotFound, "Expense not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ExpenseId) -> Result<Option<Expense>, DomainError> {
        let row: Option<ExpenseRow> = sqlx::query_as(&format!(
            "SELECT {} FROM expenses WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find expense: {}", e))
        })?;

        row.map(Expense::try_from).transpose()
    }

    async fn list(&self) -> Result<Vec<Expense>, DomainError> {
        let rows: Vec<ExpenseRow> = sqlx::query_as(&format!(
            "SELECT {} FROM expenses ORDER BY expense_date DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list expenses: {}", e))
        })?;

        rows.into_iter().map(Expense::try_from).collect()
    }
}
