//! Request validation
//!
//! `ValidatedJson` deserializes a request body and runs its `validator`
//! rules before the handler sees it, so coordinates outside the globe or
//! oversized selections never reach the map service.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::Validate;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] JsonRejection),
    #[error("Validation failed: {0}")]
    ValidationFailed(String),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::JsonError(e) => e.body_text(),
            Self::ValidationFailed(msg) => msg.clone(),
        };

        let body = serde_json::json!({
            "error": message,
            "code": "validation_error"
        });

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// A JSON extractor that also validates the request body
///
/// # Example
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct ClickRequest {
///     #[validate(range(min = -90.0, max = 90.0))]
///     latitude: f64,
/// }
///
/// async fn handler(ValidatedJson(req): ValidatedJson<ClickRequest>) {
///     // req.latitude is within range
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value.validate().map_err(|e| {
            let mut errors: Vec<String> = e
                .field_errors()
                .iter()
                .flat_map(|(field, errors)| {
                    errors
                        .iter()
                        .map(|error| {
                            format!(
                                "{}: {}",
                                field,
                                error
                                    .message
                                    .as_ref()
                                    .map_or_else(|| error.code.to_string(), ToString::to_string)
                            )
                        })
                        .collect::<Vec<_>>()
                })
                .collect();
            // Field order out of the validator is unspecified
            errors.sort();

            ValidationError::ValidationFailed(errors.join("; "))
        })?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, http::Request as HttpRequest, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;
    use validator::Validate;

    use super::*;

    #[derive(Debug, Deserialize, Validate)]
    struct PointRequest {
        #[validate(range(min = -90.0, max = 90.0, message = "must be between -90 and 90"))]
        latitude: f64,
        #[validate(range(min = -180.0, max = 180.0, message = "must be between -180 and 180"))]
        longitude: f64,
    }

    async fn point_handler(ValidatedJson(req): ValidatedJson<PointRequest>) -> String {
        format!("{},{}", req.latitude, req.longitude)
    }

    fn create_test_app() -> Router {
        Router::new().route("/point", post(point_handler))
    }

    fn post_json(body: &str) -> HttpRequest<Body> {
        HttpRequest::builder()
            .method("POST")
            .uri("/point")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn valid_request_passes() {
        let response = create_test_app()
            .oneshot(post_json(r#"{"latitude": 51.5, "longitude": -0.12}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn latitude_out_of_range_rejected() {
        let response = create_test_app()
            .oneshot(post_json(r#"{"latitude": 123.0, "longitude": -0.12}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn longitude_out_of_range_rejected() {
        let response = create_test_app()
            .oneshot(post_json(r#"{"latitude": 51.5, "longitude": -200.0}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_field_rejected() {
        let response = create_test_app()
            .oneshot(post_json(r#"{"latitude": 51.5}"#))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn invalid_json_rejected() {
        let response = create_test_app()
            .oneshot(post_json(r#"{"latitude": not valid json}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_error_display() {
        let error = ValidationError::ValidationFailed("latitude: out of range".to_string());
        assert_eq!(error.to_string(), "Validation failed: latitude: out of range");
    }
}
