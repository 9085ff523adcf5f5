//! PostgreSQL implementation of MemberRepository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{DomainError, ErrorCode, MemberId, Timestamp};
use crate::domain::member::Member;
use crate::ports::MemberRepository;

/// PostgreSQL implementation of the MemberRepository port.
pub struct PostgresMemberRepository {
    pool: PgPool,
}

impl PostgresMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a member.
#[derive(Debug, sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    name: String,
    instrument: String,
    email: String,
    city: String,
    state: String,
    phone: String,
    tefa: Option<String>,
    terms_version: String,
    terms_accepted: bool,
    submitted_at: DateTime<Utc>,
}

impl From<MemberRow> for Member {
    fn from(row: MemberRow) -> Self {
        Member {
            id: MemberId::from_uuid(row.id),
            name: row.name,
            instrument: row.instrument,
            email: row.email,
            city: row.city,
            state: row.state,
            phone: row.phone,
            tefa: row.tefa,
            terms_version: row.terms_version,
            terms_accepted: row.terms_accepted,
            submitted_at: Timestamp::from_datetime(row.submitted_at),
        }
    }
}

const SELECT_COLUMNS: &str = "id, name, instrument, email, city, state, phone, tefa, \
     terms_version, terms_accepted, submitted_at";

#[async_trait]
impl MemberRepository for PostgresMemberRepository {
    async fn create(&self, member: &Member) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO members (
                id, name, instrument, email, city, state, phone, tefa,
                terms_version, terms_accepted, submitted_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(member.id.as_uuid())
        .bind(&member.name)
        .bind(&member.instrument)
        .bind(&member.email)
        .bind(&member.city)
        .bind(&member.state)
        .bind(&member.phone)
        .bind(&member.tefa)
        .bind(&member.terms_version)
        .bind(member.terms_accepted)
        .bind(member.submitted_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to create member: {}", e))
        })?;

        Ok(())
    }

    async fn update(&self, member: &Member) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE members SET
                name = $2,
                instrument = $3,
                email = $4,
                city = $5,
                state = $6,
                phone = $7,
                tefa = $8
            WHERE id = $1
            "#,
        )
        .bind(member.id.as_uuid())
        .bind(&member.name)
        .bind(&member.instrument)
        .bind(&member.email)
        .bind(&member.city)
        .bind(&member.state)
        .bind(&member.phone)
        .bind(&member.tefa)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to update member: {}", e))
        })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::MemberNotFound, "Member not found"));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &MemberId) -> Result<Option<Member>, DomainError> {
        let row: Option<MemberRow> = sqlx::query_as(&format!(
            "SELECT {} FROM members WHERE id = $1",
            SELECT_COLUMNS
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to find member: {}", e))
        })?;

        Ok(row.map(Member::from))
    }

    async fn list(&self) -> Result<Vec<Member>, DomainError> {
        let rows: Vec<MemberRow> = sqlx::query_as(&format!(
            "SELECT {} FROM members ORDER BY submitted_at DESC",
            SELECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Failed to list members: {}", e))
        })?;

        Ok(rows.into_iter().map(Member::from).collect())
    }
}
