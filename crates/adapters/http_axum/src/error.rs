//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use registrar_domain::error::{RegistrarError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RegistrarError`] to an HTTP response with appropriate status code.
#[derive(Debug)]
pub struct ApiError(RegistrarError);

impl From<RegistrarError> for ApiError {
    fn from(err: RegistrarError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ValidationError::InvalidBody(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            RegistrarError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RegistrarError::Storage(_) => {
                let message = self.0.chain_message();
                tracing::error!(error = %message, "storage error");
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
