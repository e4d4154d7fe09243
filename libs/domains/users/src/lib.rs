//! Users Domain
//!
//! Client accounts for the commerce backend: the user entity, its CRUD
//! service, and the HTTP endpoints. Orders reference users through their
//! `client_id` foreign key; a user with orders cannot be deleted.
//!
//! The password attribute is opaque to this system. It is stored as
//! supplied and never serialized into a response.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::UsersApiDoc;
pub use models::{User, UserDto, UserPayload};
pub use postgres::PgUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
