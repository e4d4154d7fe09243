use async_trait::async_trait;
use database::{Page, PageRequest};

use crate::error::UserResult;
use crate::models::User;

/// Data access contract for users.
///
/// Implementations translate store-native failures into [`crate::UserError`];
/// no caller of this trait ever sees a `DbErr`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by identity
    async fn find_by_id(&self, id: i64) -> UserResult<Option<User>>;

    /// Fetch one page of users
    async fn find_page(&self, request: PageRequest) -> UserResult<Page<User>>;

    /// Check whether a user with the given identity exists
    async fn exists_by_id(&self, id: i64) -> UserResult<bool>;

    /// Insert a new user; the store assigns the identity.
    /// A duplicate email surfaces as `UserError::Database`.
    async fn insert(&self, user: User) -> UserResult<User>;

    /// Persist changes to an existing user
    async fn update(&self, user: User) -> UserResult<User>;

    /// Delete by identity. A user still referenced by orders surfaces as
    /// `UserError::Database`.
    async fn delete_by_id(&self, id: i64) -> UserResult<u64>;
}
