//! Task service
//!
//! CRUD over tasks with the ownership policy enforced on update and delete.

use crate::auth::ensure_can_mutate;
use crate::error::ApiError;
use crate::repositories::{CreateTask, TaskRecord, TaskRepository, UpdateTask};
use sqlx::PgPool;
use uuid::Uuid;

/// Task service for business logic
pub struct TaskService;

impl TaskService {
    /// Create a task, stamping the creator from the authenticated identity
    pub async fn create(pool: &PgPool, input: CreateTask) -> Result<TaskRecord, ApiError> {
        if input.description.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "Task description is required".to_string(),
            ));
        }

        TaskRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)
    }

    /// List tasks, most recently created first
    pub async fn list(pool: &PgPool) -> Result<Vec<TaskRecord>, ApiError> {
        TaskRepository::find_all(pool)
            .await
            .map_err(ApiError::Internal)
    }

    /// Fetch a single task
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<TaskRecord, ApiError> {
        TaskRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))
    }

    /// Patch a task after the ownership check
    ///
    /// A present-but-empty description is rejected like it is at create.
    pub async fn update(
        pool: &PgPool,
        requester: Uuid,
        id: Uuid,
        patch: UpdateTask,
    ) -> Result<TaskRecord, ApiError> {
        if patch
            .description
            .as_deref()
            .is_some_and(|d| d.trim().is_empty())
        {
            return Err(ApiError::BadRequest(
                "Task description is required".to_string(),
            ));
        }

        let task = Self::get(pool, id).await?;
        ensure_can_mutate(task.created_user, requester)?;

        TaskRepository::update(pool, id, patch)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))
    }

    /// Delete a task after the ownership check
    pub async fn delete(pool: &PgPool, requester: Uuid, id: Uuid) -> Result<(), ApiError> {
        let task = Self::get(pool, id).await?;
        ensure_can_mutate(task.created_user, requester)?;

        let removed = TaskRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;
        if !removed {
            return Err(ApiError::NotFound("Task not found".to_string()));
        }
        Ok(())
    }
}
