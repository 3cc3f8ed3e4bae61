//! Application error handling
//!
//! This module provides unified error handling for the API, converting
//! internal errors to the HTTP responses the clients expect.
//!
//! Two body shapes exist on the wire:
//! - validation-style failures carry `{"errors": [{"msg": ...}]}`
//! - everything else carries `{"msg": ...}`
//!
//! Authentication failures map to 401 and ownership failures to 403 so a
//! client can tell "who are you" apart from "you may not do that".

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request shape failure (422): empty required field, malformed email
    #[error("Validation error: {0}")]
    Validation(String),

    /// Domain-level rejection (400): duplicate registration, bad credentials,
    /// missing required resource field
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Missing or invalid token (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not permitted (403): ownership mismatch
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("Database error")]
    Database(#[from] sqlx::Error),
}

/// Body for single-message responses: `{"msg": ...}`
#[derive(Serialize)]
struct MsgBody {
    msg: String,
}

/// Body for validation-style responses: `{"errors": [{"msg": ...}]}`
#[derive(Serialize)]
struct ErrorsBody {
    errors: Vec<ErrorItem>,
}

#[derive(Serialize)]
struct ErrorItem {
    msg: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => errors_response(StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => errors_response(StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => msg_response(StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => msg_response(StatusCode::FORBIDDEN, msg),
            ApiError::NotFound(msg) => msg_response(StatusCode::NOT_FOUND, msg),
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                msg_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                msg_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                )
            }
        }
    }
}

fn msg_response(status: StatusCode, msg: String) -> Response {
    (status, Json(MsgBody { msg })).into_response()
}

fn errors_response(status: StatusCode, msg: String) -> Response {
    (
        status,
        Json(ErrorsBody {
            errors: vec![ErrorItem { msg }],
        }),
    )
        .into_response()
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
