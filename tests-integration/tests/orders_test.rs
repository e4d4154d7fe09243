//! Order projection tests against real PostgreSQL.
//!
//! Seeded history: order 1 (paid, by Maria, 2 lines, one payment), orders 2
//! and 3 waiting payment.

use database::PageRequest;
use domain_orders::{OrderError, OrderService, OrderStatus, PgOrderRepository};
use domain_products::{PgProductRepository, ProductDto, ProductService};
use test_utils::TestDatabase;

fn service(db: &TestDatabase) -> OrderService<PgOrderRepository> {
    OrderService::new(PgOrderRepository::new(db.connection.clone()))
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_find_all_pages_seeded_orders() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    let page = service.find_all(PageRequest::new(0, 10)).await.unwrap();

    assert_eq!(page.total_elements, 3);
    assert_eq!(page.content[0].id, Some(1));
    assert_eq!(page.content[0].status, OrderStatus::Paid);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_detail_joins_client_payment_and_items() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    let order = service.find_by_id(1).await.unwrap();

    assert_eq!(order.client.name, "Maria Brown");
    assert!(order.payment.is_some());
    assert_eq!(order.items.len(), 2);

    // 2 x 90.5 + 1 x 1250.0, in product-id order
    assert_eq!(order.items[0].subtotal, 181.0);
    assert_eq!(order.items[1].subtotal, 1250.0);
    assert_eq!(order.total, 1431.0);
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_detail_absent_order_is_not_found() {
    let db = TestDatabase::new().await;
    let service = service(&db);

    let err = service.find_by_id(99).await.unwrap_err();
    assert!(matches!(err, OrderError::NotFound(99)));
}

#[tokio::test]
#[ignore] // Requires Docker
async fn test_item_price_survives_product_price_change() {
    let db = TestDatabase::new().await;
    let orders = service(&db);
    let products = ProductService::new(PgProductRepository::new(db.connection.clone()));

    // Reprice product 1; order 1's first line was captured at 90.5
    let current = products.find_by_id(1).await.unwrap();
    let repriced = ProductDto {
        price: Some(999.0),
        ..current
    };
    products.update(1, repriced).await.unwrap();

    let order = orders.find_by_id(1).await.unwrap();

    assert_eq!(order.items[0].price, 90.5);
    assert_eq!(order.items[0].subtotal, 181.0);
}
