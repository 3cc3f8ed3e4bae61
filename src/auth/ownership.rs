//! Ownership policy for mutating operations
//!
//! A record may be updated or deleted only by the identity that created it.
//! The policy is applied uniformly to jobs, customers, and tasks, after the
//! existence check (404 takes precedence over 403) and before any write.

use crate::error::ApiError;
use uuid::Uuid;

/// True when the requester created the record
#[inline]
pub fn can_mutate(created_user: Uuid, requester: Uuid) -> bool {
    created_user == requester
}

/// Enforce the policy, mapping a mismatch to a 403 response
pub fn ensure_can_mutate(created_user: Uuid, requester: Uuid) -> Result<(), ApiError> {
    if can_mutate(created_user, requester) {
        Ok(())
    } else {
        Err(ApiError::Forbidden("User not authorized".to_string()))
    }
}
