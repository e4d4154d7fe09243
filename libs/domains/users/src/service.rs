//! User service - business rule layer

use std::sync::Arc;

use database::{Page, PageRequest};
use tracing::instrument;

use crate::error::{UserError, UserResult};
use crate::models::{User, UserDto, UserPayload};
use crate::repository::UserRepository;

/// Business-rule layer between the HTTP boundary and the data access layer
/// for users. Projections never carry the password.
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Fetch a user by identity
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> UserResult<UserDto> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        Ok(user.into())
    }

    /// Fetch one page of users; page metadata passes through unchanged
    #[instrument(skip(self, request))]
    pub async fn find_all(&self, request: PageRequest) -> UserResult<Page<UserDto>> {
        let page = self.repository.find_page(request).await?;
        Ok(page.map(Into::into))
    }

    /// Persist a new user built from the payload's fields
    #[instrument(skip(self, payload), fields(user_email = %payload.email))]
    pub async fn insert(&self, payload: UserPayload) -> UserResult<UserDto> {
        let record = User::from(&payload);
        let saved = self.repository.insert(record).await?;

        Ok(saved.into())
    }

    /// Overwrite the mutable fields of an existing user
    #[instrument(skip(self, payload))]
    pub async fn update(&self, id: i64, payload: UserPayload) -> UserResult<UserDto> {
        let mut record = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        record.apply(&payload);

        let saved = self.repository.update(record).await?;
        Ok(saved.into())
    }

    /// Delete a user by identity.
    ///
    /// Existence is checked first so an absent identity yields a clean
    /// NotFound. A user still referenced by orders fails with
    /// `UserError::Database`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> UserResult<()> {
        if !self.repository.exists_by_id(id).await? {
            return Err(UserError::NotFound(id));
        }

        self.repository.delete_by_id(id).await?;
        Ok(())
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use mockall::predicate::eq;

    fn maria() -> User {
        User {
            id: Some(1),
            name: "Maria Brown".to_string(),
            email: "maria@example.com".to_string(),
            phone: Some("988888888".to_string()),
            birth_date: None,
            password: "maria-secret".to_string(),
        }
    }

    fn payload() -> UserPayload {
        UserPayload {
            name: "Alex Green".to_string(),
            email: "alex@example.com".to_string(),
            phone: None,
            birth_date: None,
            password: "alex-secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_by_id_returns_dto() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(Some(maria())));

        let service = UserService::new(repository);
        let found = service.find_by_id(1).await.unwrap();

        assert_eq!(found.id, Some(1));
        assert_eq!(found.email, "maria@example.com");
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_not_found() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(repository);
        let err = service.find_by_id(99).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound(99)));
    }

    #[tokio::test]
    async fn test_insert_returns_saved_dto_with_identity() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_insert()
            .withf(|record| record.id.is_none() && record.email == "alex@example.com")
            .times(1)
            .returning(|record| Ok(User { id: Some(7), ..record }));

        let service = UserService::new(repository);
        let created = service.insert(payload()).await.unwrap();

        assert_eq!(created.id, Some(7));
    }

    #[tokio::test]
    async fn test_update_absent_is_not_found_without_saving() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(50))
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_update().never();

        let service = UserService::new(repository);
        let err = service.update(50, payload()).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound(50)));
    }

    #[tokio::test]
    async fn test_delete_absent_is_not_found_without_delete_call() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_exists_by_id()
            .with(eq(8))
            .times(1)
            .returning(|_| Ok(false));
        repository.expect_delete_by_id().never();

        let service = UserService::new(repository);
        let err = service.delete(8).await.unwrap_err();

        assert!(matches!(err, UserError::NotFound(8)));
    }

    #[tokio::test]
    async fn test_delete_with_orders_is_database_error() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_exists_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(true));
        repository
            .expect_delete_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Err(UserError::Database("orders reference".to_string())));

        let service = UserService::new(repository);
        let err = service.delete(1).await.unwrap_err();

        assert!(matches!(err, UserError::Database(_)));
    }
}
