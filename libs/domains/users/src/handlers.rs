//! HTTP endpoints for the users domain.
//!
//! Routes carry their full public paths and are merged into the app router
//! at the root, like the catalog routes.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use axum_helpers::{ErrorAt, ValidatedJson};
use database::{Page, PageRequest};

use crate::error::UserError;
use crate::models::{UserDto, UserPayload};
use crate::repository::UserRepository;
use crate::service::UserService;

/// List users, paginated
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of users", body = Page<UserDto>)
    )
)]
pub async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<UserDto>>, ErrorAt> {
    let page = service.find_all(page).await.map_err(|e| e.at(uri.path()))?;
    Ok(Json(page))
}

/// Get a user by identity
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User identity")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, ErrorAt> {
    let user = service.find_by_id(id).await.map_err(|e| e.at(uri.path()))?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created", body = UserDto,
         headers(("Location" = String, description = "Path of the new user"))),
        (status = 400, description = "Payload failed validation or email already taken")
    )
)]
pub async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<impl IntoResponse, ErrorAt> {
    let created = service.insert(payload).await.map_err(|e| e.at(uri.path()))?;

    let id = created.id.ok_or_else(|| {
        UserError::Internal("store did not assign an identity".to_string()).at(uri.path())
    })?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/users/{}", id))],
        Json(created),
    ))
}

/// Update a user's mutable fields
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User identity")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Payload failed validation"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<Json<UserDto>, ErrorAt> {
    let updated = service
        .update(id, payload)
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok(Json(updated))
}

/// Delete a user by identity
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i64, Path, description = "User identity")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 400, description = "User is still referenced by orders"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<StatusCode, ErrorAt> {
    service.delete(id).await.map_err(|e| e.at(uri.path()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// OpenAPI documentation for the user endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_users, get_user, create_user, update_user, delete_user),
    components(schemas(UserDto, UserPayload, Page<UserDto>)),
    tags((name = "users", description = "Client account operations"))
)]
pub struct UsersApiDoc;

/// Router for the user endpoints
pub fn users_router<R: UserRepository + 'static>(service: UserService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/users", get(list_users::<R>).post(create_user::<R>))
        .route(
            "/users/{id}",
            get(get_user::<R>)
                .put(update_user::<R>)
                .delete(delete_user::<R>),
        )
        .with_state(shared_service)
}
