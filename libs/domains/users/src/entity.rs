use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::{NotSet, Set};

/// SeaORM entity for the users table.
///
/// Orders point at users via `orders.client_id`; the inverse traversal is a
/// query in the orders domain, not a relation here, so the dependency
/// between the two crates stays one-directional.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<Date>,
    pub password: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::models::User {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            email: model.email,
            phone: model.phone,
            birth_date: model.birth_date,
            password: model.password,
        }
    }
}

impl From<&crate::models::User> for ActiveModel {
    fn from(user: &crate::models::User) -> Self {
        ActiveModel {
            id: match user.id {
                Some(id) => Set(id),
                None => NotSet,
            },
            name: Set(user.name.clone()),
            email: Set(user.email.clone()),
            phone: Set(user.phone.clone()),
            birth_date: Set(user.birth_date),
            password: Set(user.password.clone()),
        }
    }
}
