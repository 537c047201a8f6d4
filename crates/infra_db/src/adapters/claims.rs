//! PostgreSQL claim store adapter
//!
//! Implements [`ClaimStore`] over the `claims` table. Queries are
//! runtime-bound so the crate builds without a live database; the schema
//! lives in `migrations/` at the workspace root.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use core_kernel::{ClaimId, DomainPort, PortError};
use domain_claims::{Claim, ClaimStatus, ClaimStore, NewClaim};

use crate::error::DatabaseError;

const CLAIM_COLUMNS: &str =
    "claim_id, status, document_path, lecturer_name, notes, submitted_at, updated_at";

/// PostgreSQL-backed claim store
#[derive(Debug, Clone)]
pub struct PostgresClaimStore {
    pool: PgPool,
}

impl PostgresClaimStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the underlying pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn insert_with_id(&self, id: ClaimId, claim: &NewClaim) -> Result<ClaimRow, PortError> {
        let sql = format!(
            "INSERT INTO claims ({CLAIM_COLUMNS}) \
             VALUES ($1, $2, $3, $4, $5, $6, $6) \
             RETURNING {CLAIM_COLUMNS}"
        );
        let now = Utc::now();

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(id.value())
            .bind(claim.status.as_str())
            .bind(&claim.document_path)
            .bind(&claim.lecturer_name)
            .bind(&claim.notes)
            .bind(now)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        // Keep the identity sequence ahead of explicitly supplied keys.
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('claims', 'claim_id'), \
             (SELECT MAX(claim_id) FROM claims), true)",
        )
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(row)
    }

    async fn insert_assigning_id(&self, claim: &NewClaim) -> Result<ClaimRow, PortError> {
        let sql = format!(
            "INSERT INTO claims (status, document_path, lecturer_name, notes, submitted_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $5) \
             RETURNING {CLAIM_COLUMNS}"
        );

        sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(claim.status.as_str())
            .bind(&claim.document_path)
            .bind(&claim.lecturer_name)
            .bind(&claim.notes)
            .bind(Utc::now())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}

impl DomainPort for PostgresClaimStore {}

#[async_trait]
impl ClaimStore for PostgresClaimStore {
    async fn insert(&self, claim: NewClaim) -> Result<Claim, PortError> {
        let row = match claim.id {
            Some(id) => self.insert_with_id(id, &claim).await?,
            None => self.insert_assigning_id(&claim).await?,
        };
        row.try_into()
    }

    async fn find_by_id(&self, id: ClaimId) -> Result<Option<Claim>, PortError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE claim_id = $1");

        let row = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Claim::try_from).transpose()
    }

    async fn find_by_status(&self, status: ClaimStatus) -> Result<Vec<Claim>, PortError> {
        let sql = format!("SELECT {CLAIM_COLUMNS} FROM claims WHERE status = $1");

        let rows = sqlx::query_as::<_, ClaimRow>(&sql)
            .bind(status.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Claim::try_from).collect()
    }

    async fn update(&self, claim: &Claim) -> Result<(), PortError> {
        // document_path is immutable after creation and deliberately absent
        // from the SET list.
        let result = sqlx::query(
            "UPDATE claims \
             SET status = $2, lecturer_name = $3, notes = $4, updated_at = $5 \
             WHERE claim_id = $1",
        )
        .bind(claim.id.value())
        .bind(claim.status.as_str())
        .bind(&claim.lecturer_name)
        .bind(&claim.notes)
        .bind(claim.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Claim", claim.id));
        }
        Ok(())
    }

    async fn remove(&self, id: ClaimId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM claims WHERE claim_id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Claim", id));
        }
        Ok(())
    }

    async fn reset_all(&self) -> Result<(), PortError> {
        sqlx::query("TRUNCATE TABLE claims RESTART IDENTITY")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}

fn map_sqlx(error: sqlx::Error) -> PortError {
    DatabaseError::from(&error).into()
}

/// Database row for a claim
#[derive(Debug, sqlx::FromRow)]
struct ClaimRow {
    claim_id: i64,
    status: String,
    document_path: Option<String>,
    lecturer_name: String,
    notes: Option<String>,
    submitted_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ClaimRow> for Claim {
    type Error = PortError;

    fn try_from(row: ClaimRow) -> Result<Self, Self::Error> {
        let status = ClaimStatus::from_str(&row.status)
            .map_err(|e| PortError::from(DatabaseError::SerializationError(e.to_string())))?;

        Ok(Claim {
            id: ClaimId::new(row.claim_id),
            status,
            document_path: row.document_path,
            lecturer_name: row.lecturer_name,
            notes: row.notes,
            submitted_at: row.submitted_at,
            updated_at: row.updated_at,
        })
    }
}
