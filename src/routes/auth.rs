//! Authentication routes
//!
//! Registration, login, and the session identity lookup. Registration and
//! login are the only unprotected API routes; both return a bearer token.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::{Role, UserRecord};
use crate::services::{RegisterInput, UserService};
use crate::state::AppState;
use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registration request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Body returned by both registration and login
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Identity as it leaves the boundary; the password hash never does
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub active: bool,
    pub role: Role,
    pub hire_date: DateTime<Utc>,
}

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            active: user.active,
            role: user.role,
            hire_date: user.hire_date,
        }
    }
}

/// POST /api/users - Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = UserService::register(
        state.db(),
        state.jwt(),
        RegisterInput {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
        },
    )
    .await?;

    Ok(Json(TokenResponse { token }))
}

/// POST /api/login - Login with email and password
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let token = UserService::login(state.db(), state.jwt(), &req.email, &req.password).await?;

    Ok(Json(TokenResponse { token }))
}

/// GET /api/auth - Resolve the identity behind the presented token
pub async fn current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let user = UserService::current_user(state.db(), auth.user_id).await?;

    Ok(Json(user.into()))
}
