//! Customer profile handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{RequestBody, ValidatedJson};
use crate::api::AppState;
use crate::config::{
    MSG_CUSTOMER_ADDED, MSG_CUSTOMER_DELETED, MSG_CUSTOMER_INVALID, MSG_CUSTOMER_UPDATED,
    MSG_CUSTOMER_UPDATE_INVALID,
};
use crate::domain::Customer;
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse, RecordResponse};

/// Customer creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    #[validate(required)]
    #[schema(example = "C1")]
    pub id: Option<String>,
    #[validate(required)]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[validate(required)]
    #[schema(example = "555-0100")]
    pub contact: Option<String>,
}

impl RequestBody for CreateCustomerRequest {
    const INVALID_INPUT: &'static str = MSG_CUSTOMER_INVALID;
}

/// Customer update request; both fields are required
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    #[validate(required)]
    #[schema(example = "Jane Roe")]
    pub name: Option<String>,
    #[validate(required)]
    #[schema(example = "555-0199")]
    pub contact: Option<String>,
}

impl RequestBody for UpdateCustomerRequest {
    const INVALID_INPUT: &'static str = MSG_CUSTOMER_UPDATE_INVALID;
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerCreatedResponse {
    #[schema(example = "Customer added successfully.")]
    pub message: String,
    pub customer: Customer,
}

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", post(create_customer).get(list_customers))
        .route("/customers/:id", put(update_customer).delete(delete_customer))
}

/// Add a customer
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "Customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer added", body = CustomerCreatedResponse),
        (status = 400, description = "Missing field or duplicate id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCustomerRequest>,
) -> AppResult<Created<CustomerCreatedResponse>> {
    let customer = state
        .customer_service
        .create_customer(
            payload.id.unwrap_or_default(),
            payload.name.unwrap_or_default(),
            payload.contact.unwrap_or_default(),
        )
        .await?;

    Ok(Created(CustomerCreatedResponse {
        message: MSG_CUSTOMER_ADDED.to_string(),
        customer,
    }))
}

/// List all customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "Customers",
    responses(
        (status = 200, description = "All customers", body = [Customer]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.customer_service.list_customers().await?;
    Ok(Json(customers))
}

/// Replace name and contact of a customer
#[utoipa::path(
    put,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = String, Path, description = "Customer id")),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated; body carries message, id, name and contact"),
        (status = 400, description = "Missing name or contact"),
        (status = 404, description = "No customer with this id")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateCustomerRequest>,
) -> AppResult<Json<RecordResponse<Customer>>> {
    let customer = state
        .customer_service
        .update_customer(
            id,
            payload.name.unwrap_or_default(),
            payload.contact.unwrap_or_default(),
        )
        .await?;

    Ok(Json(RecordResponse::new(MSG_CUSTOMER_UPDATED, customer)))
}

/// Remove a customer
#[utoipa::path(
    delete,
    path = "/api/customers/{id}",
    tag = "Customers",
    params(("id" = String, Path, description = "Customer id")),
    responses(
        (status = 200, description = "Customer deleted", body = MessageResponse),
        (status = 404, description = "No customer with this id")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.customer_service.delete_customer(id).await?;
    Ok(Json(MessageResponse::new(MSG_CUSTOMER_DELETED)))
}
