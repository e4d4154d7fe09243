use async_trait::async_trait;
use database::{Page, PageRequest};

use crate::error::{CategoryResult, ProductResult};
use crate::models::{Category, Product};

/// Data access contract for products.
///
/// Implementations translate store-native failures into the domain error
/// taxonomy; no caller of this trait ever sees a `DbErr`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by identity
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>>;

    /// Fetch one page of products
    async fn find_page(&self, request: PageRequest) -> ProductResult<Page<Product>>;

    /// Batched lookup; rows come back in store order (primary-key ascending)
    async fn find_by_ids(&self, ids: Vec<i64>) -> ProductResult<Vec<Product>>;

    /// Check whether a product with the given identity exists
    async fn exists_by_id(&self, id: i64) -> ProductResult<bool>;

    /// Insert a new product; the store assigns the identity
    async fn insert(&self, product: Product) -> ProductResult<Product>;

    /// Persist changes to an existing product
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Delete by identity, returning the number of affected rows.
    /// A foreign-key violation surfaces as `ProductError::Database`.
    async fn delete_by_id(&self, id: i64) -> ProductResult<u64>;
}

/// Data access contract for categories
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// All categories, ordered by name
    async fn find_all(&self) -> CategoryResult<Vec<Category>>;

    /// Find a category by identity
    async fn find_by_id(&self, id: i64) -> CategoryResult<Option<Category>>;
}
