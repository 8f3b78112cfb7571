//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use buscadog_domain::error::{BuscaDogError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`BuscaDogError`] to an HTTP response with appropriate status code.
///
/// Validation errors surface their message to the caller; storage errors
/// are logged and answered with a generic body so nothing about the
/// database leaks out.
pub struct ApiError(BuscaDogError);

impl From<BuscaDogError> for ApiError {
    fn from(err: BuscaDogError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(BuscaDogError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            BuscaDogError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            BuscaDogError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
