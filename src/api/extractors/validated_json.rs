//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::AppError;

/// A JSON request body with a single client-facing message for bad input.
///
/// Missing fields, malformed JSON and a missing body all answer with
/// `INVALID_INPUT`; the detailed reason only goes to the debug log.
pub trait RequestBody {
    const INVALID_INPUT: &'static str;
}

/// Validated JSON extractor that automatically validates requests.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateBikeRequest {
///     #[validate(required)]
///     id: Option<String>,
/// }
///
/// impl RequestBody for CreateBikeRequest {
///     const INVALID_INPUT: &'static str = "Invalid input. Provide bike ID.";
/// }
///
/// async fn create_bike(ValidatedJson(payload): ValidatedJson<CreateBikeRequest>) {
///     // every required field is present
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate + RequestBody,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Rejected request body: {}", e.body_text());
            AppError::validation(T::INVALID_INPUT)
        })?;

        value.validate().map_err(|e| {
            tracing::debug!("Request validation failed: {}", format_validation_errors(&e));
            AppError::validation(T::INVALID_INPUT)
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors into a readable string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut fields: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is {}", field, e.code))
            })
        })
        .collect();
    fields.sort();
    fields.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Pair {
        #[validate(required)]
        left: Option<String>,
        #[validate(required)]
        right: Option<String>,
    }

    #[test]
    fn test_format_lists_every_missing_field() {
        let pair = Pair {
            left: None,
            right: None,
        };
        let errors = pair.validate().unwrap_err();
        assert_eq!(
            format_validation_errors(&errors),
            "left is required, right is required"
        );
    }

    #[test]
    fn test_empty_string_counts_as_present() {
        let pair = Pair {
            left: Some(String::new()),
            right: Some(String::new()),
        };
        assert!(pair.validate().is_ok());
    }
}
