//! Job repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Job record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct JobRecord {
    pub id: Uuid,
    pub active: bool,
    pub name: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub approved_user: Option<Uuid>,
    pub created_user: Uuid,
    pub created_date: DateTime<Utc>,
    pub inquiry_date: Option<DateTime<Utc>>,
    pub inspection_date: Option<DateTime<Utc>>,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub tentative_date: Option<DateTime<Utc>>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub primary_type: Option<String>,
    pub notes: Option<String>,
    pub inspector: Option<String>,
    pub pay_terms: Option<String>,
}

/// Input for creating a job
///
/// `created_user` is stamped by the service from the authenticated identity,
/// never taken from the request body.
#[derive(Debug, Clone)]
pub struct CreateJob {
    pub active: bool,
    pub name: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub approved_user: Option<Uuid>,
    pub created_user: Uuid,
    pub created_date: Option<DateTime<Utc>>,
    pub inquiry_date: Option<DateTime<Utc>>,
    pub inspection_date: Option<DateTime<Utc>>,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub tentative_date: Option<DateTime<Utc>>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub primary_type: Option<String>,
    pub notes: Option<String>,
    pub inspector: Option<String>,
    pub pay_terms: Option<String>,
}

/// Patch for updating a job: absent fields keep their stored values
///
/// `created_user` and `created_date` are deliberately not part of the patch.
#[derive(Debug, Clone, Default)]
pub struct UpdateJob {
    pub active: Option<bool>,
    pub name: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub approved_user: Option<Uuid>,
    pub inquiry_date: Option<DateTime<Utc>>,
    pub inspection_date: Option<DateTime<Utc>>,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub tentative_date: Option<DateTime<Utc>>,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub completed_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
    pub primary_type: Option<String>,
    pub notes: Option<String>,
    pub inspector: Option<String>,
    pub pay_terms: Option<String>,
}

const JOB_COLUMNS: &str = r#"id, active, name, street, city, state, zip,
    approved_user, created_user, created_date, inquiry_date, inspection_date,
    follow_up_date, tentative_date, scheduled_date, completed_date,
    status, primary_type, notes, inspector, pay_terms"#;

/// Job repository for database operations
pub struct JobRepository;

impl JobRepository {
    /// Create a new job
    pub async fn create(pool: &PgPool, input: CreateJob) -> Result<JobRecord> {
        let job = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            INSERT INTO jobs (active, name, street, city, state, zip,
                approved_user, created_user, created_date, inquiry_date,
                inspection_date, follow_up_date, tentative_date, scheduled_date,
                completed_date, status, primary_type, notes, inspector, pay_terms)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, NOW()), $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(input.active)
        .bind(input.name)
        .bind(input.street)
        .bind(input.city)
        .bind(input.state)
        .bind(input.zip)
        .bind(input.approved_user)
        .bind(input.created_user)
        .bind(input.created_date)
        .bind(input.inquiry_date)
        .bind(input.inspection_date)
        .bind(input.follow_up_date)
        .bind(input.tentative_date)
        .bind(input.scheduled_date)
        .bind(input.completed_date)
        .bind(input.status)
        .bind(input.primary_type)
        .bind(input.notes)
        .bind(input.inspector)
        .bind(input.pay_terms)
        .fetch_one(pool)
        .await?;

        Ok(job)
    }

    /// List all jobs, most recently created first
    ///
    /// The id tiebreak keeps the order deterministic when created dates tie.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<JobRecord>> {
        let jobs = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            ORDER BY created_date DESC, id
            "#
        ))
        .fetch_all(pool)
        .await?;

        Ok(jobs)
    }

    /// Find job by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<JobRecord>> {
        let job = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            SELECT {JOB_COLUMNS}
            FROM jobs
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(job)
    }

    /// Apply a patch to a job, returning `None` when the row no longer exists
    pub async fn update(pool: &PgPool, id: Uuid, patch: UpdateJob) -> Result<Option<JobRecord>> {
        let job = sqlx::query_as::<_, JobRecord>(&format!(
            r#"
            UPDATE jobs SET
                active = COALESCE($2, active),
                name = COALESCE($3, name),
                street = COALESCE($4, street),
                city = COALESCE($5, city),
                state = COALESCE($6, state),
                zip = COALESCE($7, zip),
                approved_user = COALESCE($8, approved_user),
                inquiry_date = COALESCE($9, inquiry_date),
                inspection_date = COALESCE($10, inspection_date),
                follow_up_date = COALESCE($11, follow_up_date),
                tentative_date = COALESCE($12, tentative_date),
                scheduled_date = COALESCE($13, scheduled_date),
                completed_date = COALESCE($14, completed_date),
                status = COALESCE($15, status),
                primary_type = COALESCE($16, primary_type),
                notes = COALESCE($17, notes),
                inspector = COALESCE($18, inspector),
                pay_terms = COALESCE($19, pay_terms)
            WHERE id = $1
            RETURNING {JOB_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.active)
        .bind(patch.name)
        .bind(patch.street)
        .bind(patch.city)
        .bind(patch.state)
        .bind(patch.zip)
        .bind(patch.approved_user)
        .bind(patch.inquiry_date)
        .bind(patch.inspection_date)
        .bind(patch.follow_up_date)
        .bind(patch.tentative_date)
        .bind(patch.scheduled_date)
        .bind(patch.completed_date)
        .bind(patch.status)
        .bind(patch.primary_type)
        .bind(patch.notes)
        .bind(patch.inspector)
        .bind(patch.pay_terms)
        .fetch_optional(pool)
        .await?;

        Ok(job)
    }

    /// Remove a job, returning whether a row was deleted
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
