//! Shared test utilities
//!
//! Provides [`TestDatabase`]: a throwaway PostgreSQL container with the
//! workspace migrations (and their seed data) already applied.
//!
//! ```rust,no_run
//! use test_utils::TestDatabase;
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! // Build repositories on db.connection
//! # }
//! ```

mod postgres;

pub use postgres::TestDatabase;
