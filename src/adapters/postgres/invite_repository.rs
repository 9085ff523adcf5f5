//! PostgreSQL implementation of InviteKeyRepository.
//!
//! Consumption is a single conditional UPDATE guarded by `consumed = FALSE`,
//! so concurrent redeemers of the same key serialize at the row and at most
//! one sees a transition.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp, UserId};
use crate::domain::invite::InviteKey;
use crate::ports::InviteKeyRepository;

/// PostgreSQL implementation of the InviteKeyRepository port.
pub struct PostgresInviteKeyRepository {
    pool: PgPool,
}

impl PostgresInviteKeyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an invite key.
#[derive(Debug, sqlx::FromRow)]
struct InviteKeyRow {
    key: String,
    consumed: bool,
    issued_by: String,
    consumed_by: Option<String>,
    consumed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<InviteKeyRow> for InviteKey {
    type Error = DomainError;

    fn try_from(row: InviteKeyRow) -> Result<Self, Self::Error> {
        Ok(InviteKey {
            key: row.key,
            consumed: row.consumed,
            issued_by: parse_user_id(row.issued_by)?,
            consumed_by: row.consumed_by.map(parse_user_id).transpose()?,
            consumed_at: row.consumed_at.map(Timestamp::from_datetime),
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

fn parse_user_id(s: String) -> Result<UserId, DomainError> {
    UserId::new(s).map_err(|e| {
        DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
    })
}

#[async_trait]
impl InviteKeyRepository for PostgresInviteKeyRepository {
    async fn find(&self, key: &str) -> Result<Option<InviteKey>, DomainError> {
        let row: Option<InviteKeyRow> = sqlx::query_as(
            r#"
            SELECT key, consumed, issued_by, consumed_by, consumed_at, created_at
            FROM invite_keys
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find invite key: {}", e))
        })?;

        row.map(InviteKey::try_from).transpose()
    }

    async fn save(&self, key: &InviteKey) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO invite_keys (key, consumed, issued_by, consumed_by, consumed_at, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (key) DO UPDATE SET
                consumed = EXCLUDED.consumed,
                issued_by = EXCLUDED.issued_by,
                consumed_by = EXCLUDED.consumed_by,
                consumed_at = EXCLUDED.consumed_at,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(&key.key)
        .bind(key.consumed)
        .bind(key.issued_by.as_str())
        .bind(key.consumed_by.as_ref().map(|u| u.as_str()))
        .bind(key.consumed_at.map(|t| *t.as_datetime()))
        .bind(key.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to save invite key: {}", e))
        })?;

        Ok(())
    }

    async fn consume_if_unconsumed(
        &self,
        key: &str,
        consumed_by: &UserId,
        consumed_at: Timestamp,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE invite_keys SET
                consumed = TRUE,
                consumed_by = $2,
                consumed_at = $3
            WHERE key = $1 AND consumed = FALSE
            "#,
        )
        .bind(key)
        .bind(consumed_by.as_str())
        .bind(consumed_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to consume invite key: {}", e),
            )
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self) -> Result<Vec<InviteKey>, DomainError> {
        let rows: Vec<InviteKeyRow> = sqlx::query_as(
            r#"
            SELECT key, consumed, issued_by, consumed_by, consumed_at, created_at
            FROM invite_keys
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list invite keys: {}", e))
        })?;

        rows.into_iter().map(InviteKey::try_from).collect()
    }
}
