use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

/// SeaORM entity for the products table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub price: Option<f64>,
    pub img_url: Option<String>,
    pub rating: Option<f64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub specifications: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_category::Entity")]
    ProductCategories,
}

impl Related<super::product_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductCategories.def()
    }
}

// Many-to-many to categories through the join table
impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_category::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// Conversion from SeaORM Model to the domain record
impl From<Model> for crate::models::Product {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            img_url: model.img_url,
            rating: model.rating,
            specifications: model.specifications,
        }
    }
}

// Conversion from the domain record to an ActiveModel. An absent identity
// stays NotSet so the store assigns it on insert.
impl From<&crate::models::Product> for ActiveModel {
    fn from(product: &crate::models::Product) -> Self {
        ActiveModel {
            id: match product.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(product.name.clone()),
            description: Set(product.description.clone()),
            price: Set(product.price),
            img_url: Set(product.img_url.clone()),
            rating: Set(product.rating),
            specifications: Set(product.specifications.clone()),
        }
    }
}
