use axum::{
    extract::OriginalUri,
    response::{IntoResponse, Response},
};

use super::AppError;

/// Fallback handler for routes that match nothing.
///
/// Renders the same error body shape as every translated failure.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    AppError::NotFound("The requested resource was not found".to_string())
        .at(uri.path())
        .into_response()
}
