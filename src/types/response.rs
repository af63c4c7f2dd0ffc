use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

/// Message-only response
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Bike deleted successfully.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Message plus the fields of the affected record, flattened:
/// `{"message": "...", "id": "B1", "model": "Roadster"}`
#[derive(Debug, Serialize)]
pub struct RecordResponse<T: Serialize> {
    pub message: String,
    #[serde(flatten)]
    pub record: T,
}

impl<T: Serialize> RecordResponse<T> {
    pub fn new(message: impl Into<String>, record: T) -> Self {
        Self {
            message: message.into(),
            record,
        }
    }
}

/// Created response helper for POST endpoints
pub struct Created<T: Serialize>(pub T);

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> axum::response::Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Sample {
        id: &'static str,
        model: &'static str,
    }

    #[test]
    fn test_record_response_is_flat() {
        let body = RecordResponse::new(
            "Bike updated successfully.",
            Sample {
                id: "B1",
                model: "Cruiser",
            },
        );
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({ "message": "Bike updated successfully.", "id": "B1", "model": "Cruiser" })
        );
    }

    #[test]
    fn test_created_status() {
        let response = Created(MessageResponse::new("ok")).into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
