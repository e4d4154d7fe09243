//! Generic data access layer over SeaORM entities.
//!
//! [`BaseRepository`] carries the CRUD operations every domain repository
//! needs: find by id, paginated find-all, existence check, insert, update,
//! delete by id. Domain repositories wrap it and add their entity-specific
//! queries (batched lookups, joins, sorting on known columns).
//!
//! [`Page`] and [`PageRequest`] form the pagination contract. Page metadata
//! produced here flows through the service layer to the HTTP response
//! unchanged.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, PrimaryKeyTrait,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// A page of results together with its pagination metadata
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Page<T> {
    /// The rows of this page
    pub content: Vec<T>,
    /// Zero-based page index that was requested
    pub page: u64,
    /// Requested page size
    pub size: u64,
    /// Total number of rows across all pages
    pub total_elements: u64,
    /// Total number of pages
    pub total_pages: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, page: u64, size: u64, total_elements: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };

        Self {
            content,
            page,
            size,
            total_elements,
            total_pages,
        }
    }

    /// Map the page content, keeping the metadata untouched
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// Sort direction parsed from a `sort=field,direction` query parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Pagination parameters accepted by list endpoints
///
/// `sort` takes `field` or `field,asc|desc`. Which fields are sortable is up
/// to each repository; unknown fields are a client error there.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(default)]
pub struct PageRequest {
    /// Zero-based page index
    pub page: u64,
    /// Page size
    pub size: u64,
    /// Optional sort spec, e.g. `price,desc`
    pub sort: Option<String>,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: 20,
            sort: None,
        }
    }
}

impl PageRequest {
    pub fn new(page: u64, size: u64) -> Self {
        Self {
            page,
            size,
            sort: None,
        }
    }

    /// Page size clamped to at least 1, so a size of 0 cannot divide by zero
    /// or produce an unbounded query
    pub fn effective_size(&self) -> u64 {
        self.size.max(1)
    }

    /// Parse the sort parameter into `(field, direction)`
    ///
    /// Returns `None` when no sort was requested or the spec is blank.
    /// Direction defaults to ascending.
    pub fn sort_spec(&self) -> Option<(&str, SortDirection)> {
        let raw = self.sort.as_deref()?.trim();
        if raw.is_empty() {
            return None;
        }

        match raw.split_once(',') {
            Some((field, direction)) if direction.trim().eq_ignore_ascii_case("desc") => {
                Some((field.trim(), SortDirection::Desc))
            }
            Some((field, _)) => Some((field.trim(), SortDirection::Asc)),
            None => Some((raw, SortDirection::Asc)),
        }
    }
}

/// Generic CRUD repository for a single SeaORM entity
///
/// Identity values are whatever the entity's primary key declares; all
/// entities in this workspace use store-assigned `i64` keys.
pub struct BaseRepository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> BaseRepository<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// The underlying connection, for entity-specific queries
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Find a single row by primary key
    pub async fn find_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    /// Check whether a row with the given primary key exists
    pub async fn exists_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<bool, DbErr>
    where
        E::Model: Sync,
    {
        let count = E::find_by_id(id).count(&self.db).await?;
        Ok(count > 0)
    }

    /// Fetch one page of rows, unsorted (store order)
    pub async fn find_page(&self, request: &PageRequest) -> Result<Page<E::Model>, DbErr>
    where
        E::Model: Sync,
    {
        let size = request.effective_size();
        let paginator = E::find().paginate(&self.db, size);
        let total_elements = paginator.num_items().await?;
        let content = paginator.fetch_page(request.page).await?;

        Ok(Page::new(content, request.page, size, total_elements))
    }

    /// Insert a new row; the store assigns the identity
    pub async fn insert<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.insert(&self.db).await
    }

    /// Update an existing row identified by the model's primary key
    pub async fn update<A>(&self, model: A) -> Result<E::Model, DbErr>
    where
        A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
        E::Model: IntoActiveModel<A>,
    {
        model.update(&self.db).await
    }

    /// Delete a row by primary key, returning the number of affected rows
    pub async fn delete_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> Result<u64, DbErr> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![1, 2, 3], 0, 3, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_elements, 7);
        assert_eq!(page.size, 3);
    }

    #[test]
    fn test_page_exact_fit() {
        let page: Page<i32> = Page::new(vec![], 1, 5, 10);
        assert_eq!(page.total_pages, 2);
    }

    #[test]
    fn test_page_map_keeps_metadata() {
        let page = Page::new(vec![1, 2], 1, 2, 4);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.content, vec!["1", "2"]);
        assert_eq!(mapped.page, 1);
        assert_eq!(mapped.total_elements, 4);
        assert_eq!(mapped.total_pages, 2);
    }

    #[test]
    fn test_page_request_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, 20);
        assert!(request.sort.is_none());
    }

    #[test]
    fn test_effective_size_never_zero() {
        let request = PageRequest::new(0, 0);
        assert_eq!(request.effective_size(), 1);
    }

    #[test]
    fn test_sort_spec_field_only() {
        let mut request = PageRequest::default();
        request.sort = Some("price".to_string());
        assert_eq!(request.sort_spec(), Some(("price", SortDirection::Asc)));
    }

    #[test]
    fn test_sort_spec_with_direction() {
        let mut request = PageRequest::default();
        request.sort = Some("price,desc".to_string());
        assert_eq!(request.sort_spec(), Some(("price", SortDirection::Desc)));

        request.sort = Some("name, ASC".to_string());
        assert_eq!(request.sort_spec(), Some(("name", SortDirection::Asc)));
    }

    #[test]
    fn test_sort_spec_blank() {
        let mut request = PageRequest::default();
        request.sort = Some("   ".to_string());
        assert_eq!(request.sort_spec(), None);
    }
}
