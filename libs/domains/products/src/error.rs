use axum_helpers::{AppError, ErrorAt};
use thiserror::Error;

/// Error taxonomy produced by the product service.
///
/// This domain is the single translation boundary for store-native errors:
/// nothing outside the repository implementations inspects `DbErr`.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),

    #[error("No products found for ids: {0}")]
    NoneFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Referential integrity violation: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Bind this error to the request path for the standard error body
    pub fn at(self, path: &str) -> ErrorAt {
        AppError::from(self).at(path)
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        let message = err.to_string();
        match err {
            ProductError::NotFound(_) | ProductError::NoneFound(_) => AppError::NotFound(message),
            ProductError::BadRequest(_) => AppError::BadRequest(message),
            ProductError::Database(_) => AppError::Database(message),
            ProductError::Internal(_) => AppError::InternalServerError(message),
        }
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        ProductError::Internal(format!("Database error: {}", err))
    }
}

/// Error taxonomy for category lookups
#[derive(Debug, Error)]
pub enum CategoryError {
    #[error("Category not found: {0}")]
    NotFound(i64),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type CategoryResult<T> = Result<T, CategoryError>;

impl CategoryError {
    pub fn at(self, path: &str) -> ErrorAt {
        AppError::from(self).at(path)
    }
}

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        let message = err.to_string();
        match err {
            CategoryError::NotFound(_) => AppError::NotFound(message),
            CategoryError::Internal(_) => AppError::InternalServerError(message),
        }
    }
}

impl From<sea_orm::DbErr> for CategoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        CategoryError::Internal(format!("Database error: {}", err))
    }
}
