/// Unified error type for database infrastructure operations
///
/// Covers connection, health check, and migration failures. Row-level errors
/// stay as `sea_orm::DbErr` and are translated by the domain repositories.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// SeaORM-level errors
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// Connection failed after retries
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Health check failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Migration error
    #[error("Migration error: {0}")]
    MigrationError(String),
}

/// Result type alias for database infrastructure operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
