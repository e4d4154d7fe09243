use async_trait::async_trait;
use database::{BaseRepository, Page, PageRequest, SortDirection};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, SqlErr};

use crate::entity;
use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

/// PostgreSQL implementation of [`UserRepository`]
pub struct PgUserRepository {
    base: BaseRepository<entity::Entity>,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn sort_column(field: &str) -> Option<entity::Column> {
        match field {
            "id" => Some(entity::Column::Id),
            "name" => Some(entity::Column::Name),
            "email" => Some(entity::Column::Email),
            _ => None,
        }
    }

    fn integrity_or_internal(err: sea_orm::DbErr) -> UserError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(message)) => UserError::Database(message),
            Some(SqlErr::ForeignKeyConstraintViolation(message)) => UserError::Database(message),
            _ => err.into(),
        }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>> {
        let model = self.base.find_by_id(id).await?;
        Ok(model.map(Into::into))
    }

    async fn find_page(&self, request: PageRequest) -> UserResult<Page<User>> {
        let mut query = entity::Entity::find();

        if let Some((field, direction)) = request.sort_spec() {
            let column = Self::sort_column(field).ok_or_else(|| {
                UserError::BadRequest(format!("Unknown sort property: '{}'", field))
            })?;
            query = match direction {
                SortDirection::Asc => query.order_by_asc(column),
                SortDirection::Desc => query.order_by_desc(column),
            };
        } else {
            query = query.order_by_asc(entity::Column::Id);
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

    async fn exists_by_id(&self, id: i64) -> UserResult<bool> {
        Ok(self.base.exists_by_id(id).await?)
    }

    async fn insert(&self, user_record: User) -> UserResult<User> {
        let active_model: entity::ActiveModel = (&user_record).into();
        let model = self
            .base
            .insert(active_model)
            .await
            .map_err(Self::integrity_or_internal)?;

        tracing::info!(user_id = model.id, "Created user");
        Ok(model.into())
    }

    async fn update(&self, user_record: User) -> UserResult<User> {
        let active_model: entity::ActiveModel = (&user_record).into();
        let model = self
            .base
            .update(active_model)
            .await
            .map_err(Self::integrity_or_internal)?;

        tracing::info!(user_id = model.id, "Updated user");
        Ok(model.into())
    }

    async fn delete_by_id(&self, id: i64) -> UserResult<u64> {
        match self.base.delete_by_id(id).await {
            Ok(rows_affected) => {
                tracing::info!(user_id = id, "Deleted user");
                Ok(rows_affected)
            }
            // The user is still referenced by orders
            Err(err) => Err(Self::integrity_or_internal(err)),
        }
    }
}
