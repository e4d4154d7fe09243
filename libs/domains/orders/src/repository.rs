use async_trait::async_trait;
use database::{Page, PageRequest};

use crate::error::OrderResult;
use crate::models::{Order, OrderDetail};

/// Data access contract for orders.
///
/// The detail lookup assembles the client, payment and item projections in
/// one place so the service never issues follow-up queries of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Fetch one page of orders
    async fn find_page(&self, request: PageRequest) -> OrderResult<Page<Order>>;

    /// Fetch an order with its client, payment and product-joined items
    async fn find_detail(&self, id: i64) -> OrderResult<Option<OrderDetail>>;
}
