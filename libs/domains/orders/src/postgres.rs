use async_trait::async_trait;
use database::{BaseRepository, Page, PageRequest, SortDirection};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use domain_products::entity::product;

use crate::entity::{order, order_item, payment};
use crate::error::{OrderError, OrderResult};
use crate::models::{ClientInfo, Order, OrderDetail, OrderItemLine};
use crate::repository::OrderRepository;

/// PostgreSQL implementation of [`OrderRepository`]
pub struct PgOrderRepository {
    base: BaseRepository<order::Entity>,
}

impl PgOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    fn sort_column(field: &str) -> Option<order::Column> {
        match field {
            "id" => Some(order::Column::Id),
            "moment" => Some(order::Column::Moment),
            _ => None,
        }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    async fn find_page(&self, request: PageRequest) -> OrderResult<Page<Order>> {
        let mut query = order::Entity::find();

        if let Some((field, direction)) = request.sort_spec() {
            let column = Self::sort_column(field).ok_or_else(|| {
                OrderError::BadRequest(format!("Unknown sort property: '{}'", field))
            })?;
            query = match direction {
                SortDirection::Asc => query.order_by_asc(column),
                SortDirection::Desc => query.order_by_desc(column),
            };
        } else {
            query = query.order_by_asc(order::Column::Id);
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

    async fn find_detail(&self, id: i64) -> OrderResult<Option<OrderDetail>> {
        let Some(order_model) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        // client_id is a non-null FK, so a missing client row is corruption,
        // not a 404
        let client_model = order_model
            .find_related(domain_users::entity::Entity)
            .one(self.base.db())
            .await?
            .ok_or_else(|| OrderError::Internal(format!("Order {} has no client row", id)))?;

        let payment_model = order_model
            .find_related(payment::Entity)
            .one(self.base.db())
            .await?;

        let rows = order_item::Entity::find()
            .filter(order_item::Column::OrderId.eq(id))
            .find_also_related(product::Entity)
            .order_by_asc(order_item::Column::ProductId)
            .all(self.base.db())
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for (item_model, product_model) in rows {
            let product_model = product_model.ok_or_else(|| {
                OrderError::Internal(format!(
                    "Order item ({}, {}) has no product row",
                    item_model.order_id, item_model.product_id
                ))
            })?;

            items.push(OrderItemLine {
                item: item_model.into(),
                product_name: product_model.name,
                img_url: product_model.img_url,
            });
        }

        Ok(Some(OrderDetail {
            order: order_model.into(),
            client: ClientInfo {
                id: client_model.id,
                name: client_model.name,
                email: client_model.email,
            },
            payment: payment_model.map(Into::into),
            items,
        }))
    }
}
