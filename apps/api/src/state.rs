//! Shared application state passed to request wiring.
//!
//! Cloning is cheap: the database connection is a pooled handle.

use database::postgres::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
}
