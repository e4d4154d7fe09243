//! Orders Domain
//!
//! Read side of the order history: orders, their line items (keyed by
//! order and product), and payments. An order's product list is derived by
//! joining through `order_items` — foreign keys are the authoritative
//! direction, object graphs are never bidirectional.
//!
//! Orders are created by seeding or by systems outside this one; the HTTP
//! surface here is lookup only.

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{OrderError, OrderResult};
pub use handlers::OrdersApiDoc;
pub use models::{Order, OrderDto, OrderItem, OrderStatus, OrderSummaryDto, Payment};
pub use postgres::PgOrderRepository;
pub use repository::OrderRepository;
pub use service::OrderService;
