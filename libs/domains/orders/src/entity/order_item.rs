use sea_orm::entity::prelude::*;

/// SeaORM entity for the order_items table.
///
/// Keyed by (order, product). The price column is the price at the time of
/// the order; it never tracks later product price changes.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "order_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub order_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub product_id: i64,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
    #[sea_orm(
        belongs_to = "domain_products::entity::product::Entity",
        from = "Column::ProductId",
        to = "domain_products::entity::product::Column::Id"
    )]
    Product,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl Related<domain_products::entity::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::OrderItem {
    fn from(model: Model) -> Self {
        Self {
            order_id: Some(model.order_id),
            product_id: Some(model.product_id),
            quantity: model.quantity,
            price: model.price,
        }
    }
}
