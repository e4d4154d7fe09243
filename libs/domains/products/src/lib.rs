//! Products Domain
//!
//! Catalog domain: products, their categories, and the business rules that
//! sit between the HTTP boundary and the data access layer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, payload validation
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │   Service   │  ← Business rules, error taxonomy
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + Postgres implementation)
//! └──────┬──────┘
//! ┌──────▼──────┐
//! │  Entities   │  ← SeaORM models, domain records, DTOs
//! └─────────────┘
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{CategoryError, CategoryResult, ProductError, ProductResult};
pub use handlers::{CategoriesApiDoc, ProductsApiDoc};
pub use models::{Category, CategoryDto, Product, ProductDto};
pub use postgres::{PgCategoryRepository, PgProductRepository};
pub use repository::{CategoryRepository, ProductRepository};
pub use service::{CategoryService, ProductService};
