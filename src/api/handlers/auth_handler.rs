//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{RequestBody, ValidatedJson};
use crate::api::AppState;
use crate::config::{
    MSG_AUTH_INVALID, MSG_LOGIN_SUCCESS, MSG_USER_ALREADY_REGISTERED, MSG_USER_REGISTERED,
};
use crate::errors::AppResult;
use crate::services::RegisterOutcome;
use crate::types::MessageResponse;

/// Username/password pair used by both register and login
#[derive(Deserialize, Validate, ToSchema)]
pub struct CredentialsRequest {
    #[validate(required)]
    #[schema(example = "alice")]
    pub username: Option<String>,
    #[validate(required)]
    #[schema(example = "pw1")]
    pub password: Option<String>,
}

impl RequestBody for CredentialsRequest {
    const INVALID_INPUT: &'static str = MSG_AUTH_INVALID;
}

impl CredentialsRequest {
    fn into_parts(self) -> (String, String) {
        (
            self.username.unwrap_or_default(),
            self.password.unwrap_or_default(),
        )
    }
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user, or log in an already registered one
///
/// A known username with the matching password answers 200 instead of 201.
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Authentication",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "User registered", body = MessageResponse),
        (status = 200, description = "Already registered, password matched", body = MessageResponse),
        (status = 400, description = "Missing field or username taken concurrently"),
        (status = 401, description = "Username registered with a different password")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CredentialsRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (username, password) = payload.into_parts();

    let response = match state.auth_service.register(username, password).await? {
        RegisterOutcome::Created(_) => (
            StatusCode::CREATED,
            Json(MessageResponse::new(MSG_USER_REGISTERED)),
        ),
        RegisterOutcome::AlreadyRegistered(_) => (
            StatusCode::OK,
            Json(MessageResponse::new(MSG_USER_ALREADY_REGISTERED)),
        ),
    };

    Ok(response)
}

/// Check a username and password
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login successful", body = MessageResponse),
        (status = 400, description = "Missing field"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CredentialsRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (username, password) = payload.into_parts();
    state.auth_service.login(username, password).await?;

    Ok(Json(MessageResponse::new(MSG_LOGIN_SUCCESS)))
}
