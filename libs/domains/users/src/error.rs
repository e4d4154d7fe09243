use axum_helpers::{AppError, ErrorAt};
use thiserror::Error;

/// Error taxonomy produced by the user service
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(i64),

    #[error("{0}")]
    BadRequest(String),

    /// Integrity violation at the store: a duplicate email on save, or a
    /// delete blocked by orders that still reference the user
    #[error("Referential integrity violation: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl UserError {
    /// Bind this error to the request path for the standard error body
    pub fn at(self, path: &str) -> ErrorAt {
        AppError::from(self).at(path)
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::NotFound(_) => AppError::NotFound(message),
            UserError::BadRequest(_) => AppError::BadRequest(message),
            UserError::Database(_) => AppError::Database(message),
            UserError::Internal(_) => AppError::InternalServerError(message),
        }
    }
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        UserError::Internal(format!("Database error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_helpers::translate;

    #[test]
    fn test_not_found_translates_to_404() {
        let app_error = AppError::from(UserError::NotFound(5));
        let (status, body) = translate(&app_error, "/users/5");

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error, "User not found: 5");
    }

    #[test]
    fn test_database_translates_to_400() {
        let app_error = AppError::from(UserError::Database("orders reference".to_string()));
        let (status, _) = translate(&app_error, "/users/1");

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_internal_translates_to_500() {
        let app_error = AppError::from(UserError::Internal("pool exhausted".to_string()));
        let (status, _) = translate(&app_error, "/users");

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
