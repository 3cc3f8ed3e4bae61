//! Authentication middleware
//!
//! An Axum extractor that gates protected handlers on the `x-auth-token`
//! header. A missing header and a failed verification produce distinct
//! 401 bodies; the downstream handler never runs in either case.
//!
//! Uses the pre-computed JWT keys from AppState, so verification is a pure
//! signature check plus a clock read.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRef,
    http::request::Parts,
};
use uuid::Uuid;

/// Header carrying the bearer token (raw token, no scheme prefix)
pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Authenticated user extracted from the request token
///
/// Handlers take this as an argument; its presence in the signature is what
/// makes a route protected.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        // No token at all: short-circuit before touching the verifier
        let token = parts
            .headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| {
                ApiError::Unauthorized("No token, authorization denied".to_string())
            })?;

        let claims = app_state
            .jwt()
            .verify(token)
            .map_err(|_| ApiError::Unauthorized("Token is not valid".to_string()))?;

        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| ApiError::Unauthorized("Token is not valid".to_string()))?;

        Ok(AuthUser { user_id })
    }
}
