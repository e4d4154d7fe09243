use axum_helpers::{AppError, ErrorAt};
use thiserror::Error;

/// Error taxonomy produced by the order service
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(i64),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl OrderError {
    /// Bind this error to the request path for the standard error body
    pub fn at(self, path: &str) -> ErrorAt {
        AppError::from(self).at(path)
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::NotFound(_) => AppError::NotFound(message),
            OrderError::BadRequest(_) => AppError::BadRequest(message),
            OrderError::Internal(_) => AppError::InternalServerError(message),
        }
    }
}

impl From<sea_orm::DbErr> for OrderError {
    fn from(err: sea_orm::DbErr) -> Self {
        OrderError::Internal(format!("Database error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_helpers::translate;

    #[test]
    fn test_not_found_translates_to_404() {
        let app_error = AppError::from(OrderError::NotFound(42));
        let (status, body) = translate(&app_error, "/orders/42");

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "Order not found: 42");
    }

    #[test]
    fn test_internal_translates_to_500() {
        let app_error = AppError::from(OrderError::Internal("join failed".to_string()));
        let (status, _) = translate(&app_error, "/orders/1");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
