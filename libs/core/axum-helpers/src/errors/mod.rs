pub mod handlers;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use validator::ValidationErrors;

/// Wire-format error body.
///
/// Every translated failure — whether raised by a domain service, payload
/// validation, or JSON parsing — is rendered as this structure:
///
/// ```json
/// {
///   "timestamp": "2025-08-05T12:34:56.789Z",
///   "status": 404,
///   "error": "Product not found: 999",
///   "path": "/products/999"
/// }
/// ```
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CustomError {
    /// Moment the error was translated into a response
    pub timestamp: DateTime<Utc>,
    /// HTTP status code, duplicated in the body
    pub status: u16,
    /// Human-readable message, verbatim from the originating error
    pub error: String,
    /// Request path that triggered the failure
    pub path: String,
}

/// Application error type that handlers convert domain errors into.
///
/// Only three failure modes receive structured translation on purpose:
/// `NotFound`, `BadRequest`, and `Database`. Everything else is a generic
/// server failure.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    /// Malformed client input; the store is never consulted
    #[error("{0}")]
    BadRequest(String),

    /// The requested entity (or every entity of a batch) is absent
    #[error("{0}")]
    NotFound(String),

    /// Store-level integrity violation, e.g. deleting a row that other rows
    /// still reference. Client-actionable, hence a 400.
    #[error("{0}")]
    Database(String),

    /// Payload failed declarative validation
    #[error("Validation failed: {0}")]
    ValidationError(#[from] ValidationErrors),

    /// Body could not be deserialized as JSON
    #[error("{0}")]
    JsonRejection(#[from] JsonRejection),

    /// Untranslated server failure
    #[error("{0}")]
    InternalServerError(String),
}

impl AppError {
    /// The HTTP status this error translates to
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Database(_) | AppError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::JsonRejection(rejection) => rejection.status(),
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Bind this error to the request path it occurred on, producing a
    /// responder that renders the full [`CustomError`] body.
    pub fn at(self, path: impl Into<String>) -> ErrorAt {
        ErrorAt {
            error: self,
            path: path.into(),
        }
    }
}

/// Translate an error into its HTTP status and wire body.
///
/// The timestamp is captured here, at translation time, not when the error
/// was constructed.
pub fn translate(error: &AppError, path: &str) -> (StatusCode, CustomError) {
    let status = error.status_code();

    let body = CustomError {
        timestamp: Utc::now(),
        status: status.as_u16(),
        error: error.to_string(),
        path: path.to_string(),
    };

    (status, body)
}

/// An [`AppError`] bound to the request path it occurred on
pub struct ErrorAt {
    pub error: AppError,
    pub path: String,
}

impl IntoResponse for ErrorAt {
    fn into_response(self) -> Response {
        let (status, body) = translate(&self.error, &self.path);

        if status.is_server_error() {
            tracing::error!(path = %self.path, status = status.as_u16(), "{}", self.error);
        } else {
            tracing::info!(path = %self.path, status = status.as_u16(), "{}", self.error);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = AppError::NotFound("Product not found: 99".to_string());
        let (status, body) = translate(&error, "/products/99");

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.status, 404);
        assert_eq!(body.error, "Product not found: 99");
        assert_eq!(body.path, "/products/99");
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let error = AppError::BadRequest("The 'ids' parameter is required".to_string());
        let (status, body) = translate(&error, "/products/compare");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.status, 400);
        assert_eq!(body.error, "The 'ids' parameter is required");
        assert_eq!(body.path, "/products/compare");
    }

    #[test]
    fn test_database_maps_to_400() {
        // Integrity violations are triggered by client-supplied referential
        // state, so they are client errors, not server faults.
        let error = AppError::Database("Referential integrity violation".to_string());
        let (status, body) = translate(&error, "/products/7");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Referential integrity violation");
    }

    #[test]
    fn test_internal_maps_to_500() {
        let error = AppError::InternalServerError("connection pool exhausted".to_string());
        let (status, _) = translate(&error, "/products");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_timestamp_captured_at_translation_time() {
        let error = AppError::NotFound("gone".to_string());

        let before = Utc::now();
        let (_, body) = translate(&error, "/products/1");
        let after = Utc::now();

        assert!(body.timestamp >= before);
        assert!(body.timestamp <= after);
    }

    #[test]
    fn test_message_copied_verbatim() {
        let message = "Invalid product id: 'abc'";
        let error = AppError::BadRequest(message.to_string());
        let (_, body) = translate(&error, "/products/compare");

        assert_eq!(body.error, message);
    }
}
