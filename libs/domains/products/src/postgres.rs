use async_trait::async_trait;
use database::{BaseRepository, Page, PageRequest, SortDirection};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, SqlErr,
};

use crate::{
    entity::{category, product},
    error::{CategoryResult, ProductError, ProductResult},
    models::{Category, Product},
    repository::{CategoryRepository, ProductRepository},
};

/// PostgreSQL implementation of [`ProductRepository`]
pub struct PgProductRepository {
    base: BaseRepository<product::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn sort_column(field: &str) -> Option<product::Column> {
        match field {
            "id" => Some(product::Column::Id),
            "name" => Some(product::Column::Name),
            "price" => Some(product::Column::Price),
            "rating" => Some(product::Column::Rating),
            _ => None,
        }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_by_id(&self, id: i64) -> ProductResult<Option<Product>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn find_page(&self, request: PageRequest) -> ProductResult<Page<Product>> {
        let mut query = product::Entity::find();

        // Sortable fields are a fixed set; anything else is a client error
        if let Some((field, direction)) = request.sort_spec() {
            let column = Self::sort_column(field).ok_or_else(|| {
                ProductError::BadRequest(format!("Unknown sort property: '{}'", field))
            })?;
            query = match direction {
                SortDirection::Asc => query.order_by_asc(column),
                SortDirection::Desc => query.order_by_desc(column),
            };
        } else {
            query = query.order_by_asc(product::Column::Id);
        }

        let size = request.effective_size();
        let paginator = query.paginate(self.base.db(), size);
        let total_elements = paginator.num_items().await?;
        let models = paginator.fetch_page(request.page).await?;

        Ok(Page::new(
            models.into_iter().map(Into::into).collect(),
            request.page,
            size,
            total_elements,
        ))
    }

    async fn find_by_ids(&self, ids: Vec<i64>) -> ProductResult<Vec<Product>> {
        // Store return order is primary-key ascending, made explicit here so
        // the compare endpoint's ordering is deterministic.
        let models = product::Entity::find()
            .filter(product::Column::Id.is_in(ids))
            .order_by_asc(product::Column::Id)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn exists_by_id(&self, id: i64) -> ProductResult<bool> {
        Ok(self.base.exists_by_id(id).await?)
    }

    async fn insert(&self, product_record: Product) -> ProductResult<Product> {
        let active_model: product::ActiveModel = (&product_record).into();
        let model = self.base.insert(active_model).await?;

        tracing::info!(product_id = model.id, "Created product");
        Ok(model.into())
    }

    async fn update(&self, product_record: Product) -> ProductResult<Product> {
        let active_model: product::ActiveModel = (&product_record).into();
        let model = self.base.update(active_model).await?;

        tracing::info!(product_id = model.id, "Updated product");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i64) -> ProductResult<u64> {
        match self.base.delete_by_id(id).await {
            Ok(rows_affected) => {
                tracing::info!(product_id = id, "Deleted product");
                Ok(rows_affected)
            }
            Err(err) => match err.sql_err() {
                // The product is still referenced by order items
                Some(SqlErr::ForeignKeyConstraintViolation(message)) => {
                    Err(ProductError::Database(message))
                }
                _ => Err(err.into()),
            },
        }
    }
}

/// PostgreSQL implementation of [`CategoryRepository`]
pub struct PgCategoryRepository {
    base: BaseRepository<category::Entity>,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn find_all(&self) -> CategoryResult<Vec<Category>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Name)
            .all(self.base.db())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i64) -> CategoryResult<Option<Category>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }
}
