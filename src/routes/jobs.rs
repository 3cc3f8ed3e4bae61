//! Job API routes

use super::parse_id;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::{CreateJob, JobRecord, UpdateJob};
use crate::services::JobService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create job routes
pub fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_job).get(list_jobs))
        .route("/:id", get(get_job).put(update_job).delete(delete_job))
}

/// Job creation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub active: Option<bool>,
    #[serde(default)]
    pub name: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub approved_user: Option<Uuid>,
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

/// Job update request body; omitted fields keep their stored values
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobRequest {
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

/// Job as it appears on the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
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

impl From<JobRecord> for JobResponse {
    fn from(job: JobRecord) -> Self {
        Self {
            id: job.id,
            active: job.active,
            name: job.name,
            street: job.street,
            city: job.city,
            state: job.state,
            zip: job.zip,
            approved_user: job.approved_user,
            created_user: job.created_user,
            created_date: job.created_date,
            inquiry_date: job.inquiry_date,
            inspection_date: job.inspection_date,
            follow_up_date: job.follow_up_date,
            tentative_date: job.tentative_date,
            scheduled_date: job.scheduled_date,
            completed_date: job.completed_date,
            status: job.status,
            primary_type: job.primary_type,
            notes: job.notes,
            inspector: job.inspector,
            pay_terms: job.pay_terms,
        }
    }
}

/// POST /api/jobs - Create a job
async fn create_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateJobRequest>,
) -> ApiResult<Json<JobResponse>> {
    let input = CreateJob {
        active: req.active.unwrap_or(true),
        name: req.name,
        street: req.street,
        city: req.city,
        state: req.state,
        zip: req.zip,
        approved_user: req.approved_user,
        created_user: auth.user_id,
        created_date: req.created_date,
        inquiry_date: req.inquiry_date,
        inspection_date: req.inspection_date,
        follow_up_date: req.follow_up_date,
        tentative_date: req.tentative_date,
        scheduled_date: req.scheduled_date,
        completed_date: req.completed_date,
        status: req.status,
        primary_type: req.primary_type,
        notes: req.notes,
        inspector: req.inspector,
        pay_terms: req.pay_terms,
    };

    let job = JobService::create(state.db(), input).await?;
    Ok(Json(job.into()))
}

/// GET /api/jobs - List jobs, most recently created first
async fn list_jobs(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<JobResponse>>> {
    let jobs = JobService::list(state.db()).await?;
    Ok(Json(jobs.into_iter().map(Into::into).collect()))
}

/// GET /api/jobs/:id - Get a single job
async fn get_job(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<JobResponse>> {
    let job_id = parse_id(&id, "Job")?;
    let job = JobService::get(state.db(), job_id).await?;
    Ok(Json(job.into()))
}

/// PUT /api/jobs/:id - Update a job (creator only)
async fn update_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateJobRequest>,
) -> ApiResult<Json<JobResponse>> {
    let job_id = parse_id(&id, "Job")?;
    let patch = UpdateJob {
        active: req.active,
        name: req.name,
        street: req.street,
        city: req.city,
        state: req.state,
        zip: req.zip,
        approved_user: req.approved_user,
        inquiry_date: req.inquiry_date,
        inspection_date: req.inspection_date,
        follow_up_date: req.follow_up_date,
        tentative_date: req.tentative_date,
        scheduled_date: req.scheduled_date,
        completed_date: req.completed_date,
        status: req.status,
        primary_type: req.primary_type,
        notes: req.notes,
        inspector: req.inspector,
        pay_terms: req.pay_terms,
    };

    let job = JobService::update(state.db(), auth.user_id, job_id, patch).await?;
    Ok(Json(job.into()))
}

/// DELETE /api/jobs/:id - Delete a job (creator only)
async fn delete_job(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let job_id = parse_id(&id, "Job")?;
    JobService::delete(state.db(), auth.user_id, job_id).await?;
    Ok(Json(serde_json::json!({ "msg": "Job removed" })))
}
