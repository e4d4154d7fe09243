//! HTTP endpoints for the catalog domain.
//!
//! Routes carry their full public paths and are merged into the app router
//! at the root: the `path` field of error bodies must equal the path a
//! client requested, so no prefix is ever added on top.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, OpenApi};

use axum_helpers::{ErrorAt, ValidatedJson};
use database::{Page, PageRequest};

use crate::error::ProductError;
use crate::models::{CategoryDto, ProductDto};
use crate::repository::{CategoryRepository, ProductRepository};
use crate::service::{CategoryService, ProductService};

/// Query parameters of the compare endpoint
#[derive(Debug, Deserialize, IntoParams)]
pub struct CompareQuery {
    /// Comma-separated product identities, e.g. `1,3,5`
    pub ids: Option<String>,
}

/// List products, paginated
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of products", body = Page<ProductDto>),
        (status = 400, description = "Unknown sort property")
    )
)]
pub async fn list_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<ProductDto>>, ErrorAt> {
    let page = service
        .find_all(page)
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok(Json(page))
}

/// Compare products by a comma-separated list of identities.
///
/// Results come back in store order (primary-key ascending), not in the
/// order the ids were requested.
#[utoipa::path(
    get,
    path = "/products/compare",
    tag = "products",
    params(CompareQuery),
    responses(
        (status = 200, description = "The matching products", body = Vec<ProductDto>),
        (status = 400, description = "Missing, blank or non-numeric ids"),
        (status = 404, description = "None of the requested ids exist")
    )
)]
pub async fn compare_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<CompareQuery>,
) -> Result<Json<Vec<ProductDto>>, ErrorAt> {
    let products = service
        .compare_by_ids(query.ids.as_deref())
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok(Json(products))
}

/// Get a product by identity
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product identity")),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Json<ProductDto>, ErrorAt> {
    let product = service.find_by_id(id).await.map_err(|e| e.at(uri.path()))?;
    Ok(Json(product))
}

/// Create a product.
///
/// The payload is validated before this handler body runs; the response
/// carries the created resource and a Location header pointing at it.
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto,
         headers(("Location" = String, description = "Path of the new product"))),
        (status = 400, description = "Payload failed validation")
    )
)]
pub async fn create_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(dto): ValidatedJson<ProductDto>,
) -> Result<impl IntoResponse, ErrorAt> {
    let created = service.insert(dto).await.map_err(|e| e.at(uri.path()))?;

    let id = created.id.ok_or_else(|| {
        ProductError::Internal("store did not assign an identity".to_string()).at(uri.path())
    })?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/products/{}", id))],
        Json(created),
    ))
}

/// Update a product's mutable fields
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product identity")),
    request_body = ProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Payload failed validation"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn update_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<ProductDto>,
) -> Result<Json<ProductDto>, ErrorAt> {
    let updated = service
        .update(id, dto)
        .await
        .map_err(|e| e.at(uri.path()))?;

    Ok(Json(updated))
}

/// Delete a product by identity
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(("id" = i64, Path, description = "Product identity")),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Product is still referenced by order items"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn delete_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<StatusCode, ErrorAt> {
    service.delete(id).await.map_err(|e| e.at(uri.path()))?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories, ordered by name", body = Vec<CategoryDto>)
    )
)]
pub async fn list_categories<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    OriginalUri(uri): OriginalUri,
) -> Result<Json<Vec<CategoryDto>>, ErrorAt> {
    let categories = service.find_all().await.map_err(|e| e.at(uri.path()))?;
    Ok(Json(categories))
}

/// Get a category by identity
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "categories",
    params(("id" = i64, Path, description = "Category identity")),
    responses(
        (status = 200, description = "The category", body = CategoryDto),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Json<CategoryDto>, ErrorAt> {
    let category = service.find_by_id(id).await.map_err(|e| e.at(uri.path()))?;
    Ok(Json(category))
}

/// OpenAPI documentation for the product endpoints
#[derive(OpenApi)]
#[openapi(
    paths(
        list_products,
        compare_products,
        get_product,
        create_product,
        update_product,
        delete_product,
    ),
    components(schemas(ProductDto, Page<ProductDto>)),
    tags((name = "products", description = "Product catalog operations"))
)]
pub struct ProductsApiDoc;

/// OpenAPI documentation for the category endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_categories, get_category),
    components(schemas(CategoryDto)),
    tags((name = "categories", description = "Category lookups"))
)]
pub struct CategoriesApiDoc;

/// Router for the product endpoints.
///
/// `/products/compare` is registered as a static segment, so it wins over
/// `/products/{id}` regardless of registration order.
pub fn products_router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/products",
            get(list_products::<R>).post(create_product::<R>),
        )
        .route("/products/compare", get(compare_products::<R>))
        .route(
            "/products/{id}",
            get(get_product::<R>)
                .put(update_product::<R>)
                .delete(delete_product::<R>),
        )
        .with_state(shared_service)
}

/// Router for the category endpoints
pub fn categories_router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/categories", get(list_categories::<R>))
        .route("/categories/{id}", get(get_category::<R>))
        .with_state(shared_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;
    use crate::repository::MockProductRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(repository: MockProductRepository) -> Router {
        products_router(ProductService::new(repository))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn sample_product(id: i64) -> Product {
        Product {
            id: Some(id),
            name: format!("Product {}", id),
            description: "A reasonably long description".to_string(),
            price: Some(42.0),
            img_url: Some("https://img.example.com/p.jpg".to_string()),
            rating: Some(4.5),
            specifications: None,
        }
    }

    #[tokio::test]
    async fn test_get_absent_product_renders_404_body() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(999))
            .returning(|_| Ok(None));

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .uri("/products/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Product not found: 999");
        assert_eq!(body["path"], "/products/999");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_invalid_payload_never_reaches_the_service() {
        // No expectations: any repository call panics the test
        let repository = MockProductRepository::new();

        let payload = json!({
            "name": "A",
            "description": "too short",
            "price": -5.0
        });

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/products")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["status"], 400);
        assert_eq!(body["path"], "/products");
    }

    #[tokio::test]
    async fn test_create_returns_201_with_location() {
        let mut repository = MockProductRepository::new();
        repository.expect_insert().returning(|record| {
            Ok(Product {
                id: Some(42),
                ..record
            })
        });

        let payload = json!({
            "name": "Macbook Pro",
            "description": "Apple M1 with 16GB of RAM",
            "price": 1250.0
        });

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/products")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/products/42"
        );

        let body = body_json(response).await;
        assert_eq!(body["id"], 42);
        assert_eq!(body["name"], "Macbook Pro");
    }

    #[tokio::test]
    async fn test_update_absent_product_is_404() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(7))
            .returning(|_| Ok(None));

        let payload = json!({
            "name": "Renamed product",
            "description": "Still a valid description",
            "price": 10.0
        });

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/products/7")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["path"], "/products/7");
    }

    #[tokio::test]
    async fn test_delete_returns_204() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_exists_by_id()
            .with(eq(3))
            .returning(|_| Ok(true));
        repository
            .expect_delete_by_id()
            .with(eq(3))
            .returning(|_| Ok(1));

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/products/3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_delete_referenced_product_is_400() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_exists_by_id()
            .with(eq(1))
            .returning(|_| Ok(true));
        repository
            .expect_delete_by_id()
            .with(eq(1))
            .returning(|_| Err(ProductError::Database("still referenced".to_string())));

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/products/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compare_malformed_ids_is_400() {
        let repository = MockProductRepository::new();

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .uri("/products/compare?ids=a,2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["path"], "/products/compare");
    }

    #[tokio::test]
    async fn test_compare_returns_products() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_find_by_ids()
            .with(eq(vec![1i64, 2]))
            .returning(|_| Ok(vec![sample_product(1), sample_product(2)]));

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .uri("/products/compare?ids=1,2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
        assert_eq!(body[0]["id"], 1);
        assert_eq!(body[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_list_products_passes_page_metadata_through() {
        let mut repository = MockProductRepository::new();
        repository.expect_find_page().returning(|_| {
            Ok(Page::new(vec![sample_product(1), sample_product(2)], 0, 2, 5))
        });

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .uri("/products?page=0&size=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["total_elements"], 5);
        assert_eq!(body["total_pages"], 3);
        assert_eq!(body["content"].as_array().unwrap().len(), 2);
    }
}
