//! Job service
//!
//! CRUD over jobs with the ownership policy enforced on update and delete.
//! Mutations check existence first, so a missing record reads as 404 even
//! to a requester who would not have been authorized.

use crate::auth::ensure_can_mutate;
use crate::error::ApiError;
use crate::repositories::{CreateJob, JobRecord, JobRepository, UpdateJob};
use sqlx::PgPool;
use uuid::Uuid;

/// Job service for business logic
pub struct JobService;

impl JobService {
    /// Create a job, stamping the creator from the authenticated identity
    pub async fn create(pool: &PgPool, input: CreateJob) -> Result<JobRecord, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::BadRequest("Job name is required".to_string()));
        }

        JobRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)
    }

    /// List jobs, most recently created first
    pub async fn list(pool: &PgPool) -> Result<Vec<JobRecord>, ApiError> {
        JobRepository::find_all(pool)
            .await
            .map_err(ApiError::Internal)
    }

    /// Fetch a single job
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<JobRecord, ApiError> {
        JobRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))
    }

    /// Patch a job after the ownership check
    ///
    /// The name stays required: a present-but-empty name is rejected the same
    /// way create rejects it, so an update cannot blank a field create insists
    /// on. A row deleted between the ownership check and the patch reads as
    /// not found rather than a server error.
    pub async fn update(
        pool: &PgPool,
        requester: Uuid,
        id: Uuid,
        patch: UpdateJob,
    ) -> Result<JobRecord, ApiError> {
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ApiError::BadRequest("Job name is required".to_string()));
        }

        let job = Self::get(pool, id).await?;
        ensure_can_mutate(job.created_user, requester)?;

        JobRepository::update(pool, id, patch)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Job not found".to_string()))
    }

    /// Delete a job after the ownership check
    pub async fn delete(pool: &PgPool, requester: Uuid, id: Uuid) -> Result<(), ApiError> {
        let job = Self::get(pool, id).await?;
        ensure_can_mutate(job.created_user, requester)?;

        let removed = JobRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;
        if !removed {
            return Err(ApiError::NotFound("Job not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Database-backed paths are covered in tests/jobs_integration_test.rs
}
