//! Customer API routes

use super::parse_id;
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::repositories::{CreateCustomer, CustomerRecord, UpdateCustomer};
use crate::services::CustomerService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_customer).get(list_customers))
        .route(
            "/:id",
            get(get_customer).put(update_customer).delete(delete_customer),
        )
}

/// Customer creation request body
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[serde(default)]
    pub name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub company: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub business_type: Option<String>,
    #[serde(default)]
    pub phone_numbers: Vec<String>,
    pub email: Option<String>,
    pub referred_by: Option<String>,
    pub ad_source: Option<String>,
    pub use_me_as_reference: Option<bool>,
}

/// Customer update request body; omitted fields keep their stored values
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
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

/// Customer as it appears on the wire
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
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

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            first_name: customer.first_name,
            last_name: customer.last_name,
            company: customer.company,
            address: customer.address,
            city: customer.city,
            state: customer.state,
            zip: customer.zip,
            business_type: customer.business_type,
            phone_numbers: customer.phone_numbers,
            email: customer.email,
            referred_by: customer.referred_by,
            ad_source: customer.ad_source,
            use_me_as_reference: customer.use_me_as_reference,
            created_user: customer.created_user,
            created_date: customer.created_date,
        }
    }
}

/// POST /api/customers - Create a customer
async fn create_customer(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateCustomerRequest>,
) -> ApiResult<Json<CustomerResponse>> {
    let input = CreateCustomer {
        name: req.name,
        first_name: req.first_name,
        last_name: req.last_name,
        company: req.company,
        address: req.address,
        city: req.city,
        state: req.state,
        zip: req.zip,
        business_type: req.business_type,
        phone_numbers: req.phone_numbers,
        email: req.email,
        referred_by: req.referred_by,
        ad_source: req.ad_source,
        use_me_as_reference: req.use_me_as_reference.unwrap_or(false),
        created_user: auth.user_id,
    };

    let customer = CustomerService::create(state.db(), input).await?;
    Ok(Json(customer.into()))
}

/// GET /api/customers - List customers, most recently created first
async fn list_customers(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<CustomerResponse>>> {
    let customers = CustomerService::list(state.db()).await?;
    Ok(Json(customers.into_iter().map(Into::into).collect()))
}

/// GET /api/customers/:id - Get a single customer
async fn get_customer(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<CustomerResponse>> {
    let customer_id = parse_id(&id, "Customer")?;
    let customer = CustomerService::get(state.db(), customer_id).await?;
    Ok(Json(customer.into()))
}

/// PUT /api/customers/:id - Update a customer (creator only)
async fn update_customer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<UpdateCustomerRequest>,
) -> ApiResult<Json<CustomerResponse>> {
    let customer_id = parse_id(&id, "Customer")?;
    let patch = UpdateCustomer {
        name: req.name,
        first_name: req.first_name,
        last_name: req.last_name,
        company: req.company,
        address: req.address,
        city: req.city,
        state: req.state,
        zip: req.zip,
        business_type: req.business_type,
        phone_numbers: req.phone_numbers,
        email: req.email,
        referred_by: req.referred_by,
        ad_source: req.ad_source,
        use_me_as_reference: req.use_me_as_reference,
    };

    let customer = CustomerService::update(state.db(), auth.user_id, customer_id, patch).await?;
    Ok(Json(customer.into()))
}

/// DELETE /api/customers/:id - Delete a customer (creator only)
async fn delete_customer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let customer_id = parse_id(&id, "Customer")?;
    CustomerService::delete(state.db(), auth.user_id, customer_id).await?;
    Ok(Json(serde_json::json!({ "msg": "Customer removed" })))
}
