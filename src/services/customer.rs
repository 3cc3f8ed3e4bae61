//! Customer service
//!
//! Same shape as the job service. The original system skipped the ownership
//! check on customer mutations; here they are gated like every other owned
//! resource.

use crate::auth::ensure_can_mutate;
use crate::error::ApiError;
use crate::repositories::{CreateCustomer, CustomerRecord, CustomerRepository, UpdateCustomer};
use sqlx::PgPool;
use uuid::Uuid;

/// Customer service for business logic
pub struct CustomerService;

impl CustomerService {
    /// Create a customer, stamping the creator from the authenticated identity
    pub async fn create(pool: &PgPool, input: CreateCustomer) -> Result<CustomerRecord, ApiError> {
        if input.name.trim().is_empty() {
            return Err(ApiError::BadRequest(
                "Customer name is required".to_string(),
            ));
        }

        CustomerRepository::create(pool, input)
            .await
            .map_err(ApiError::Internal)
    }

    /// List customers, most recently created first
    pub async fn list(pool: &PgPool) -> Result<Vec<CustomerRecord>, ApiError> {
        CustomerRepository::find_all(pool)
            .await
            .map_err(ApiError::Internal)
    }

    /// Fetch a single customer
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<CustomerRecord, ApiError> {
        CustomerRepository::find_by_id(pool, id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Customer not found".to_string()))
    }

    /// Patch a customer after the ownership check
    ///
    /// A present-but-empty name is rejected like it is at create, so an
    /// update cannot blank the one field create insists on.
    pub async fn update(
        pool: &PgPool,
        requester: Uuid,
        id: Uuid,
        patch: UpdateCustomer,
    ) -> Result<CustomerRecord, ApiError> {
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(ApiError::BadRequest(
                "Customer name is required".to_string(),
            ));
        }

        let customer = Self::get(pool, id).await?;
        ensure_can_mutate(customer.created_user, requester)?;

        CustomerRepository::update(pool, id, patch)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("Customer not found".to_string()))
    }

    /// Delete a customer after the ownership check
    pub async fn delete(pool: &PgPool, requester: Uuid, id: Uuid) -> Result<(), ApiError> {
        let customer = Self::get(pool, id).await?;
        ensure_can_mutate(customer.created_user, requester)?;

        let removed = CustomerRepository::delete(pool, id)
            .await
            .map_err(ApiError::Internal)?;
        if !removed {
            return Err(ApiError::NotFound("Customer not found".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Database-backed paths are covered in tests/customers_integration_test.rs
}
