use sea_orm::entity::prelude::*;

/// SeaORM entity for the payments table, one-to-one with orders
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub moment: DateTimeWithTimeZone,
    #[sea_orm(unique)]
    pub order_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::order::Entity",
        from = "Column::OrderId",
        to = "super::order::Column::Id"
    )]
    Order,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Order.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::Payment {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            moment: model.moment.into(),
            order_id: model.order_id,
        }
    }
}
