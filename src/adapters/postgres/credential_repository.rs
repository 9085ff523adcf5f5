//! PostgreSQL implementation of CredentialRepository.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{DomainError, ErrorCode, Role, UserId};
use crate::ports::{AdminCredential, CredentialRepository};

/// PostgreSQL implementation of the CredentialRepository port.
///
/// Administrator accounts are provisioned out of band (seed migration or
/// manual insert); there is no signup path.
pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of an administrator credential.
#[derive(Debug, sqlx::FromRow)]
struct CredentialRow {
    id: String,
    email: String,
    secret_digest: String,
    role: String,
}

impl TryFrom<CredentialRow> for AdminCredential {
    type Error = DomainError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        let role: Role = row.role.parse().map_err(|_| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid role value: {}", row.role),
            )
        })?;

        Ok(AdminCredential {
            id: UserId::new(row.id).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user id: {}", e))
            })?,
            email: row.email,
            secret_digest: row.secret_digest,
            role,
        })
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminCredential>, DomainError> {
        let row: Option<CredentialRow> = sqlx::query_as(
            r#"
            SELECT id, email, secret_digest, role
            FROM admin_users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find credential: {}", e))
        })?;

        row.map(AdminCredential::try_from).transpose()
    }
}
