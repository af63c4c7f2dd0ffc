//! Bike inventory handlers.

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
    MSG_BIKE_ADDED, MSG_BIKE_DELETED, MSG_BIKE_INVALID, MSG_BIKE_UPDATED,
    MSG_BIKE_UPDATE_INVALID,
};
use crate::domain::Bike;
use crate::errors::AppResult;
use crate::types::{Created, MessageResponse, RecordResponse};

/// Bike creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBikeRequest {
    #[validate(required)]
    #[schema(example = "B1")]
    pub id: Option<String>,
    #[validate(required)]
    #[schema(example = "Roadster")]
    pub model: Option<String>,
}

impl RequestBody for CreateBikeRequest {
    const INVALID_INPUT: &'static str = MSG_BIKE_INVALID;
}

/// Bike update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBikeRequest {
    #[validate(required)]
    #[schema(example = "Cruiser")]
    pub model: Option<String>,
}

impl RequestBody for UpdateBikeRequest {
    const INVALID_INPUT: &'static str = MSG_BIKE_UPDATE_INVALID;
}

/// Response for a created bike: `{"message": ..., "bike": {...}}`
#[derive(Debug, Serialize, ToSchema)]
pub struct BikeCreatedResponse {
    #[schema(example = "Bike added successfully.")]
    pub message: String,
    pub bike: Bike,
}

/// Create bike routes
pub fn bike_routes() -> Router<AppState> {
    Router::new()
        .route("/bikes", post(create_bike).get(list_bikes))
        .route("/bikes/:id", put(update_bike).delete(delete_bike))
}

/// Add a bike
#[utoipa::path(
    post,
    path = "/api/bikes",
    tag = "Bikes",
    request_body = CreateBikeRequest,
    responses(
        (status = 201, description = "Bike added", body = BikeCreatedResponse),
        (status = 400, description = "Missing field or duplicate id"),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn create_bike(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateBikeRequest>,
) -> AppResult<Created<BikeCreatedResponse>> {
    // Presence is guaranteed by ValidatedJson
    let bike = state
        .bike_service
        .create_bike(
            payload.id.unwrap_or_default(),
            payload.model.unwrap_or_default(),
        )
        .await?;

    Ok(Created(BikeCreatedResponse {
        message: MSG_BIKE_ADDED.to_string(),
        bike,
    }))
}

/// List all bikes
#[utoipa::path(
    get,
    path = "/api/bikes",
    tag = "Bikes",
    responses(
        (status = 200, description = "All bikes", body = [Bike]),
        (status = 500, description = "Storage failure")
    )
)]
pub async fn list_bikes(State(state): State<AppState>) -> AppResult<Json<Vec<Bike>>> {
    let bikes = state.bike_service.list_bikes().await?;
    Ok(Json(bikes))
}

/// Change the model of a bike
#[utoipa::path(
    put,
    path = "/api/bikes/{id}",
    tag = "Bikes",
    params(("id" = String, Path, description = "Bike id")),
    request_body = UpdateBikeRequest,
    responses(
        (status = 200, description = "Bike updated; body carries message, id and model"),
        (status = 400, description = "Missing model"),
        (status = 404, description = "No bike with this id")
    )
)]
pub async fn update_bike(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateBikeRequest>,
) -> AppResult<Json<RecordResponse<Bike>>> {
    let bike = state
        .bike_service
        .update_bike(id, payload.model.unwrap_or_default())
        .await?;

    Ok(Json(RecordResponse::new(MSG_BIKE_UPDATED, bike)))
}

/// Remove a bike
#[utoipa::path(
    delete,
    path = "/api/bikes/{id}",
    tag = "Bikes",
    params(("id" = String, Path, description = "Bike id")),
    responses(
        (status = 200, description = "Bike deleted", body = MessageResponse),
        (status = 404, description = "No bike with this id")
    )
)]
pub async fn delete_bike(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.bike_service.delete_bike(id).await?;
    Ok(Json(MessageResponse::new(MSG_BIKE_DELETED)))
}
