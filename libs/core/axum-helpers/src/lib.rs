//! # Axum Helpers
//!
//! Shared utilities for the HTTP layer of this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: the single error translation boundary — domain errors
//!   become `{timestamp, status, error, path}` responses here
//! - **[`extractors`]**: `ValidatedJson`, which rejects invalid payloads
//!   before a handler body runs
//! - **[`http`]**: CORS and security header middleware
//! - **[`server`]**: router assembly, API docs, health endpoints, graceful
//!   shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{translate, AppError, CustomError, ErrorAt};

// Re-export extractors
pub use extractors::ValidatedJson;

// Re-export HTTP middleware
pub use http::{create_cors_layer, create_permissive_cors_layer, security_headers};

// Re-export server types
pub use server::{
    create_app, create_production_app, create_router, health_router, run_health_checks,
    shutdown_signal, HealthCheckFuture, HealthResponse, ShutdownCoordinator,
};
