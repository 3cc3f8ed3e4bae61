//! Task API routes

use super::parse_id;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::{CreateTask, TaskRecord, UpdateTask};
use crate::services::TaskService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create task routes
pub fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_task).get(list_tasks))
        .route("/:id", get(get_task).put(update_task).delete(delete_task))
}

/// Task creation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[serde(default)]
    pub description: String,
    pub assigned_user: Option<Uuid>,
    pub created_date: Option<DateTime<Utc>>,
    pub complete_date: Option<DateTime<Utc>>,
}

/// Task update request body; omitted fields keep their stored values
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub description: Option<String>,
    pub assigned_user: Option<Uuid>,
    pub complete_date: Option<DateTime<Utc>>,
}

/// Task as it appears on the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: Uuid,
    pub description: String,
    pub created_user: Uuid,
    pub assigned_user: Option<Uuid>,
    pub created_date: DateTime<Utc>,
    pub complete_date: Option<DateTime<Utc>>,
}

impl From<TaskRecord> for TaskResponse {
    fn from(task: TaskRecord) -> Self {
        Self {
            id: task.id,
            description: task.description,
            created_user: task.created_user,
            assigned_user: task.assigned_user,
            created_date: task.created_date,
            complete_date: task.complete_date,
        }
    }
}

/// POST /api/tasks - Create a task
async fn create_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let input = CreateTask {
        description: req.description,
        created_user: auth.user_id,
        assigned_user: req.assigned_user,
        created_date: req.created_date,
        complete_date: req.complete_date,
    };

    let task = TaskService::create(state.db(), input).await?;
    Ok(Json(task.into()))
}

/// GET /api/tasks - List tasks, most recently created first
async fn list_tasks(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<TaskResponse>>> {
    let tasks = TaskService::list(state.db()).await?;
    Ok(Json(tasks.into_iter().map(Into::into).collect()))
}

/// GET /api/tasks/:id - Get a single task
async fn get_task(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = parse_id(&id, "Task")?;
    let task = TaskService::get(state.db(), task_id).await?;
    Ok(Json(task.into()))
}

/// PUT /api/tasks/:id - Update a task (creator only)
async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateTaskRequest>,
) -> ApiResult<Json<TaskResponse>> {
    let task_id = parse_id(&id, "Task")?;
    let patch = UpdateTask {
        description: req.description,
        assigned_user: req.assigned_user,
        complete_date: req.complete_date,
    };

    let task = TaskService::update(state.db(), auth.user_id, task_id, patch).await?;
    Ok(Json(task.into()))
}

/// DELETE /api/tasks/:id - Delete a task (creator only)
async fn delete_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let task_id = parse_id(&id, "Task")?;
    TaskService::delete(state.db(), auth.user_id, task_id).await?;
    Ok(Json(serde_json::json!({ "msg": "Task removed" })))
}
