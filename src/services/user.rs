//! User service for registration, login, and session lookup
//!
//! Password hashing and verification run on the blocking thread pool; token
//! issuance uses the pre-computed keys held in AppState.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{UserRecord, UserRepository};
use sqlx::PgPool;
use uuid::Uuid;
use validator::ValidateEmail;

/// Input for registering a user
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// User service for authentication operations
pub struct UserService;

impl UserService {
    /// Register a new user and issue a token
    pub async fn register(
        pool: &PgPool,
        jwt_service: &JwtService,
        input: RegisterInput,
    ) -> Result<String, ApiError> {
        if input.first_name.trim().is_empty() {
            return Err(ApiError::Validation(
                "Please enter your first name".to_string(),
            ));
        }
        if input.last_name.trim().is_empty() {
            return Err(ApiError::Validation(
                "Please enter your last name".to_string(),
            ));
        }
        if !input.email.validate_email() {
            return Err(ApiError::Validation(
                "Please enter a valid email".to_string(),
            ));
        }
        if input.password.len() < 6 {
            return Err(ApiError::Validation(
                "Please enter a password with 6 or more characters".to_string(),
            ));
        }

        if UserRepository::email_exists(pool, &input.email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::BadRequest("User already exists".to_string()));
        }

        // Hash on the blocking thread pool (CPU-intensive)
        let password_hash = PasswordService::hash_async(input.password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(
            pool,
            &input.first_name,
            &input.last_name,
            &input.email,
            &password_hash,
        )
        .await
        .map_err(ApiError::Internal)?;

        jwt_service.issue(user.id).map_err(ApiError::Internal)
    }

    /// Login with email and password, issuing a token on success
    ///
    /// Unknown email and wrong password produce the same response, so the
    /// endpoint cannot be used to enumerate accounts.
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        email: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        if !email.validate_email() {
            return Err(ApiError::Validation(
                "Please enter a valid email".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(ApiError::Validation("A password is required".to_string()));
        }

        let user = UserRepository::find_by_email(pool, email)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::BadRequest("Invalid email or password".to_string()))?;

        // Verify on the blocking thread pool (CPU-intensive)
        let valid = PasswordService::verify_async(password.to_string(), user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            return Err(ApiError::BadRequest(
                "Invalid email or password".to_string(),
            ));
        }

        jwt_service.issue(user.id).map_err(ApiError::Internal)
    }

    /// Load the identity behind an authenticated session
    pub async fn current_user(pool: &PgPool, user_id: Uuid) -> Result<UserRecord, ApiError> {
        UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    // Database-backed paths are covered in tests/auth_integration_test.rs
}
