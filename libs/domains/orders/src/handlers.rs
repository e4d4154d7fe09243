//! HTTP endpoints for the orders domain

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, Path, Query, State},
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use axum_helpers::ErrorAt;
use database::{Page, PageRequest};

use crate::models::{OrderDto, OrderSummaryDto};
use crate::repository::OrderRepository;
use crate::service::OrderService;

/// List orders, paginated
#[utoipa::path(
    get,
    path = "/orders",
    tag = "orders",
    params(PageRequest),
    responses(
        (status = 200, description = "One page of order summaries", body = Page<OrderSummaryDto>)
    )
)]
pub async fn list_orders<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    OriginalUri(uri): OriginalUri,
    Query(page): Query<PageRequest>,
) -> Result<Json<Page<OrderSummaryDto>>, ErrorAt> {
    let page = service.find_all(page).await.map_err(|e| e.at(uri.path()))?;
    Ok(Json(page))
}

/// Get an order's full projection by identity
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "orders",
    params(("id" = i64, Path, description = "Order identity")),
    responses(
        (status = 200, description = "The order with client, payment and items", body = OrderDto),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order<R: OrderRepository>(
    State(service): State<Arc<OrderService<R>>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<i64>,
) -> Result<Json<OrderDto>, ErrorAt> {
    let order = service.find_by_id(id).await.map_err(|e| e.at(uri.path()))?;
    Ok(Json(order))
}

/// OpenAPI documentation for the order endpoints
#[derive(OpenApi)]
#[openapi(
    paths(list_orders, get_order),
    components(schemas(OrderDto, OrderSummaryDto, Page<OrderSummaryDto>)),
    tags((name = "orders", description = "Order history lookups"))
)]
pub struct OrdersApiDoc;

/// Router for the order endpoints
pub fn orders_router<R: OrderRepository + 'static>(service: OrderService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/orders", get(list_orders::<R>))
        .route("/orders/{id}", get(get_order::<R>))
        .with_state(shared_service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientInfo, Order, OrderDetail, OrderItem, OrderItemLine, OrderStatus};
    use crate::repository::MockOrderRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use http_body_util::BodyExt;
    use mockall::predicate::eq;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app(repository: MockOrderRepository) -> Router {
        orders_router(OrderService::new(repository))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_absent_order_renders_404_body() {
        let mut repository = MockOrderRepository::new();
        repository
            .expect_find_detail()
            .with(eq(12))
            .returning(|_| Ok(None));

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .uri("/orders/12")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["path"], "/orders/12");
    }

    #[tokio::test]
    async fn test_get_order_serializes_status_and_total() {
        let mut repository = MockOrderRepository::new();
        repository.expect_find_detail().with(eq(1)).returning(|_| {
            Ok(Some(OrderDetail {
                order: Order {
                    id: Some(1),
                    moment: Utc::now(),
                    status: OrderStatus::Paid,
                    client_id: 1,
                },
                client: ClientInfo {
                    id: 1,
                    name: "Maria Brown".to_string(),
                    email: "maria@example.com".to_string(),
                },
                payment: None,
                items: vec![OrderItemLine {
                    item: OrderItem {
                        order_id: Some(1),
                        product_id: Some(1),
                        quantity: 2,
                        price: 90.5,
                    },
                    product_name: "The Lord of the Rings".to_string(),
                    img_url: None,
                }],
            }))
        });

        let response = app(repository)
            .oneshot(
                Request::builder()
                    .uri("/orders/1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "PAID");
        assert_eq!(body["total"], 181.0);
        assert_eq!(body["items"][0]["name"], "The Lord of the Rings");
    }
}
