//! Task repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Task record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TaskRecord {
    pub id: Uuid,
    pub description: String,
    pub created_user: Uuid,
    pub assigned_user: Option<Uuid>,
    pub created_date: DateTime<Utc>,
    pub complete_date: Option<DateTime<Utc>>,
}

/// Input for creating a task
#[derive(Debug, Clone)]
pub struct CreateTask {
    pub description: String,
    pub created_user: Uuid,
    pub assigned_user: Option<Uuid>,
    pub created_date: Option<DateTime<Utc>>,
    pub complete_date: Option<DateTime<Utc>>,
}

/// Patch for updating a task: absent fields keep their stored values
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub description: Option<String>,
    pub assigned_user: Option<Uuid>,
    pub complete_date: Option<DateTime<Utc>>,
}

/// Task repository for database operations
pub struct TaskRepository;

impl TaskRepository {
    /// Create a new task
    pub async fn create(pool: &PgPool, input: CreateTask) -> Result<TaskRecord> {
        let task = sqlx::query_as::<_, TaskRecord>(
            r#"
            INSERT INTO tasks (description, created_user, assigned_user, created_date, complete_date)
            VALUES ($1, $2, $3, COALESCE($4, NOW()), $5)
            RETURNING id, description, created_user, assigned_user, created_date, complete_date
            "#,
        )
        .bind(input.description)
        .bind(input.created_user)
        .bind(input.assigned_user)
        .bind(input.created_date)
        .bind(input.complete_date)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// List all tasks, most recently created first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<TaskRecord>> {
        let tasks = sqlx::query_as::<_, TaskRecord>(
            r#"
            SELECT id, description, created_user, assigned_user, created_date, complete_date
            FROM tasks
            ORDER BY created_date DESC, id
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Find task by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<TaskRecord>> {
        let task = sqlx::query_as::<_, TaskRecord>(
            r#"
            SELECT id, description, created_user, assigned_user, created_date, complete_date
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Apply a patch to a task, returning `None` when the row no longer exists
    pub async fn update(pool: &PgPool, id: Uuid, patch: UpdateTask) -> Result<Option<TaskRecord>> {
        let task = sqlx::query_as::<_, TaskRecord>(
            r#"
            UPDATE tasks SET
                description = COALESCE($2, description),
                assigned_user = COALESCE($3, assigned_user),
                complete_date = COALESCE($4, complete_date)
            WHERE id = $1
            RETURNING id, description, created_user, assigned_user, created_date, complete_date
            "#,
        )
        .bind(id)
        .bind(patch.description)
        .bind(patch.assigned_user)
        .bind(patch.complete_date)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Remove a task, returning whether a row was deleted
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see tests/tasks_integration_test.rs
}
