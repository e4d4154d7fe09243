//! Order service - read-side projections

use std::sync::Arc;

use database::{Page, PageRequest};
use tracing::instrument;

use crate::error::{OrderError, OrderResult};
use crate::models::{OrderDto, OrderSummaryDto};
use crate::repository::OrderRepository;

/// Read-side service for orders: paged summaries and the full detail
/// projection with computed line subtotals and order total.
pub struct OrderService<R: OrderRepository> {
    repository: Arc<R>,
}

impl<R: OrderRepository> OrderService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Fetch one page of order summaries; page metadata passes through
    /// unchanged
    #[instrument(skip(self, request))]
    pub async fn find_all(&self, request: PageRequest) -> OrderResult<Page<OrderSummaryDto>> {
        let page = self.repository.find_page(request).await?;
        Ok(page.map(Into::into))
    }

    /// Fetch an order's full projection by identity
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, id: i64) -> OrderResult<OrderDto> {
        let detail = self
            .repository
            .find_detail(id)
            .await?
            .ok_or(OrderError::NotFound(id))?;

        Ok(detail.into())
    }
}

impl<R: OrderRepository> Clone for OrderService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientInfo, Order, OrderDetail, OrderItem, OrderItemLine, OrderStatus};
    use crate::repository::MockOrderRepository;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn order(id: i64) -> Order {
        Order {
            id: Some(id),
            moment: Utc::now(),
            status: OrderStatus::WaitingPayment,
            client_id: 1,
        }
    }

    fn detail(id: i64) -> OrderDetail {
        OrderDetail {
            order: order(id),
            client: ClientInfo {
                id: 1,
                name: "Maria Brown".to_string(),
                email: "maria@example.com".to_string(),
            },
            payment: None,
            items: vec![OrderItemLine {
                item: OrderItem {
                    order_id: Some(id),
                    product_id: Some(5),
                    quantity: 2,
                    price: 100.99,
                },
                product_name: "Rails for Dummies".to_string(),
                img_url: None,
            }],
        }
    }

    #[tokio::test]
    async fn test_find_all_maps_page_and_keeps_metadata() {
        let mut repository = MockOrderRepository::new();
        repository
            .expect_find_page()
            .times(1)
            .returning(|_| Ok(Page::new(vec![order(1), order(2)], 0, 10, 3)));

        let service = OrderService::new(repository);
        let page = service.find_all(PageRequest::new(0, 10)).await.unwrap();

        assert_eq!(page.total_elements, 3);
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].id, Some(1));
    }

    #[tokio::test]
    async fn test_find_by_id_computes_total() {
        let mut repository = MockOrderRepository::new();
        repository
            .expect_find_detail()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(Some(detail(3))));

        let service = OrderService::new(repository);
        let dto = service.find_by_id(3).await.unwrap();

        assert_eq!(dto.id, Some(3));
        assert_eq!(dto.items.len(), 1);
        assert_eq!(dto.items[0].subtotal, 201.98);
        assert_eq!(dto.total, 201.98);
        assert_eq!(dto.client.name, "Maria Brown");
        assert!(dto.payment.is_none());
    }

    #[tokio::test]
    async fn test_find_by_id_absent_is_not_found() {
        let mut repository = MockOrderRepository::new();
        repository
            .expect_find_detail()
            .with(eq(99))
            .times(1)
            .returning(|_| Ok(None));

        let service = OrderService::new(repository);
        let err = service.find_by_id(99).await.unwrap_err();

        assert!(matches!(err, OrderError::NotFound(99)));
    }
}
