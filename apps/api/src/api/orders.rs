use axum::Router;
use domain_orders::{handlers, OrderService, PgOrderRepository};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgOrderRepository::new(state.db.clone());
    let service = OrderService::new(repository);
    handlers::orders_router(service)
}
