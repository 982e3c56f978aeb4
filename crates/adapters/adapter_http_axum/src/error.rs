//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use openship_domain::error::OpenShipError;

/// JSON error body returned by every failing endpoint.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`OpenShipError`] to an HTTP response with appropriate status code.
pub struct ApiError(OpenShipError);

impl From<OpenShipError> for ApiError {
    fn from(err: OpenShipError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            OpenShipError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            OpenShipError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            OpenShipError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            OpenShipError::Platform(err) => {
                tracing::error!(error = %err, "platform error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
