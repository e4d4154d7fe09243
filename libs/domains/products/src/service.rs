//! Product and category services - business rule layer

use std::sync::Arc;

use database::{Page, PageRequest};
use tracing::instrument;

use crate::error::{CategoryError, CategoryResult, ProductError, ProductResult};
use crate::models::{CategoryDto, Product, ProductDto};
use crate::repository::{CategoryRepository, ProductRepository};

/// Business-rule layer between the HTTP boundary and the data access layer
/// for products.
///
/// Every operation returns transfer projections and the domain error
/// taxonomy; store-native errors never cross this boundary.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Fetch a product by identity
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> ProductResult<ProductDto> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        Ok(product.into())
    }

    /// Fetch one page of products; page metadata passes through unchanged
    #[instrument(skip(self, request))]
    pub async fn find_all(&self, request: PageRequest) -> ProductResult<Page<ProductDto>> {
        let page = self.repository.find_page(request).await?;
        Ok(page.map(Into::into))
    }

    /// Persist a new product built from the transfer object's fields.
    /// The identity is assigned by the store and returned in the projection.
    #[instrument(skip(self, dto), fields(product_name = %dto.name))]
    pub async fn insert(&self, dto: ProductDto) -> ProductResult<ProductDto> {
        let record = Product::from(&dto);
        let saved = self.repository.insert(record).await?;

        Ok(saved.into())
    }

    /// Overwrite the mutable fields of an existing product.
    ///
    /// Absence at the store level, whatever the low-level signal was,
    /// uniformly surfaces as NotFound.
    #[instrument(skip(self, dto))]
    pub async fn update(&self, id: i64, dto: ProductDto) -> ProductResult<ProductDto> {
        let mut record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        record.apply(&dto);

        let saved = self.repository.update(record).await?;
        Ok(saved.into())
    }

    /// Delete a product by identity.
    ///
    /// Existence is checked first so an absent identity yields a clean
    /// NotFound instead of an ambiguous zero-row delete. A product still
    /// referenced by order items fails with `ProductError::Database`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ProductResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(ProductError::NotFound(id));
        }

        self.repository.delete_by_id(id).await?;
        Ok(())
    }

    /// Batched lookup for product comparison.
    ///
    /// Accepts a comma-separated list of identities. Output order follows
    /// the store's return order (primary-key ascending), not the order of
    /// the requested ids.
    #[instrument(skip(self))]
    pub async fn compare_by_ids(&self, ids_csv: Option<&str>) -> ProductResult<Vec<ProductDto>> {
        let raw = ids_csv
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                ProductError::BadRequest("The 'ids' parameter is required".to_string())
            })?;

        let ids = raw
            .split(',')
            .map(|token| {
                let token = token.trim();
                token.parse::<i64>().map_err(|_| {
                    ProductError::BadRequest(format!("Invalid product id: '{}'", token))
                })
            })
            .collect::<ProductResult<Vec<i64>>>()?;

        let products = self.repository.find_by_ids(ids).await?;

        if products.is_empty() {
            return Err(ProductError::NoneFound(raw.to_string()));
        }

        Ok(products.into_iter().map(Into::into).collect())
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

/// Read-side service for categories
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn find_all(&self) -> CategoryResult<Vec<CategoryDto>> {
        let categories = self.repository.find_all().await?;
        Ok(categories.into_iter().map(Into::into).collect())
    }

    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> CategoryResult<CategoryDto> {
        let category = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        Ok(category.into())
    }
}

impl<R: CategoryRepository> Clone for CategoryService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
