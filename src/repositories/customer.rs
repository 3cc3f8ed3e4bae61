//! Customer repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Customer record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CustomerRecord {
    pub id: Uuid,
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub business_type: Option<String>,
    pub phone_numbers: Vec<String>,
    pub email: Option<String>,
    pub referred_by: Option<String>,
    pub ad_source: Option<String>,
    pub use_me_as_reference: bool,
    pub created_user: Uuid,
    pub created_date: DateTime<Utc>,
}

/// Input for creating a customer
#[derive(Debug, Clone)]
pub struct CreateCustomer {
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub business_type: Option<String>,
    pub phone_numbers: Vec<String>,
    pub email: Option<String>,
    pub referred_by: Option<String>,
    pub ad_source: Option<String>,
    pub use_me_as_reference: bool,
    pub created_user: Uuid,
}

/// Patch for updating a customer: absent fields keep their stored values
#[derive(Debug, Clone, Default)]
pub struct UpdateCustomer {
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub business_type: Option<String>,
    pub phone_numbers: Option<Vec<String>>,
    pub email: Option<String>,
    pub referred_by: Option<String>,
    pub ad_source: Option<String>,
    pub use_me_as_reference: Option<bool>,
}

const CUSTOMER_COLUMNS: &str = r#"id, name, first_name, last_name, company,
    address, city, state, zip, business_type, phone_numbers, email,
    referred_by, ad_source, use_me_as_reference, created_user, created_date"#;

/// Customer repository for database operations
pub struct CustomerRepository;

impl CustomerRepository {
    /// Create a new customer
    pub async fn create(pool: &PgPool, input: CreateCustomer) -> Result<CustomerRecord> {
        let customer = sqlx::query_as::<_, CustomerRecord>(&format!(
            r#"
            INSERT INTO customers (name, first_name, last_name, company,
                address, city, state, zip, business_type, phone_numbers,
                email, referred_by, ad_source, use_me_as_reference, created_user)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(input.name)
        .bind(input.first_name)
        .bind(input.last_name)
        .bind(input.company)
        .bind(input.address)
        .bind(input.city)
        .bind(input.state)
        .bind(input.zip)
        .bind(input.business_type)
        .bind(input.phone_numbers)
        .bind(input.email)
        .bind(input.referred_by)
        .bind(input.ad_source)
        .bind(input.use_me_as_reference)
        .bind(input.created_user)
        .fetch_one(pool)
        .await?;

        Ok(customer)
    }

    /// List all customers, most recently created first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<CustomerRecord>> {
        let customers = sqlx::query_as::<_, CustomerRecord>(&format!(
            r#"
            SELECT {CUSTOMER_COLUMNS}
            FROM customers
            ORDER BY created_date DESC, id
            "#
        ))
        .fetch_all(pool)
        .await?;

        Ok(customers)
    }

    /// Find customer by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<CustomerRecord>> {
        let customer = sqlx::query_as::<_, CustomerRecord>(&format!(
            r#"
            SELECT {CUSTOMER_COLUMNS}
            FROM customers
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(customer)
    }

    /// Apply a patch to a customer, returning `None` when the row no longer exists
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        patch: UpdateCustomer,
    ) -> Result<Option<CustomerRecord>> {
        let customer = sqlx::query_as::<_, CustomerRecord>(&format!(
            r#"
            UPDATE customers SET
                name = COALESCE($2, name),
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                company = COALESCE($5, company),
                address = COALESCE($6, address),
                city = COALESCE($7, city),
                state = COALESCE($8, state),
                zip = COALESCE($9, zip),
                business_type = COALESCE($10, business_type),
                phone_numbers = COALESCE($11, phone_numbers),
                email = COALESCE($12, email),
                referred_by = COALESCE($13, referred_by),
                ad_source = COALESCE($14, ad_source),
                use_me_as_reference = COALESCE($15, use_me_as_reference)
            WHERE id = $1
            RETURNING {CUSTOMER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.first_name)
        .bind(patch.last_name)
        .bind(patch.company)
        .bind(patch.address)
        .bind(patch.city)
        .bind(patch.state)
        .bind(patch.zip)
        .bind(patch.business_type)
        .bind(patch.phone_numbers)
        .bind(patch.email)
        .bind(patch.referred_by)
        .bind(patch.ad_source)
        .bind(patch.use_me_as_reference)
        .fetch_optional(pool)
        .await?;

        Ok(customer)
    }

    /// Remove a customer, returning whether a row was deleted
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
