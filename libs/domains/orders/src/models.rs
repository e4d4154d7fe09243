use chrono::{DateTime, Utc};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use strum::Display;
use utoipa::ToSchema;

/// Lifecycle of an order.
///
/// Stored as the Postgres `order_status` enum; serialized to the API in the
/// upper-case form clients expect (`WAITING_PAYMENT`, `PAID`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    Default,
    DeriveActiveEnum,
    EnumIter,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "order_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    #[sea_orm(string_value = "waiting_payment")]
    WaitingPayment,
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "shipped")]
    Shipped,
    #[sea_orm(string_value = "delivered")]
    Delivered,
    #[sea_orm(string_value = "canceled")]
    Canceled,
}

/// Order domain record.
///
/// `client_id` is the authoritative foreign key; the client's fields and the
/// order's items are query projections, never owned references.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: Option<i64>,
    pub moment: DateTime<Utc>,
    pub status: OrderStatus,
    pub client_id: i64,
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Order {}

impl Hash for Order {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.unwrap_or(0).hash(state);
    }
}

/// Order line record, keyed by (order identity, product identity).
///
/// `price` is the price at the time of the order; product price changes
/// must not rewrite it.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub order_id: Option<i64>,
    pub product_id: Option<i64>,
    pub quantity: i32,
    pub price: f64,
}

impl OrderItem {
    /// Line subtotal: historical price times quantity
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

// Composite-key identity: equality follows the (order, product) pair only.
impl PartialEq for OrderItem {
    fn eq(&self, other: &Self) -> bool {
        self.order_id == other.order_id && self.product_id == other.product_id
    }
}

impl Eq for OrderItem {}

impl Hash for OrderItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.order_id.unwrap_or(0).hash(state);
        self.product_id.unwrap_or(0).hash(state);
    }
}

/// Payment domain record, one-to-one with its order
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: Option<i64>,
    pub moment: DateTime<Utc>,
    pub order_id: i64,
}

impl PartialEq for Payment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Payment {}

impl Hash for Payment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.unwrap_or(0).hash(state);
    }
}

/// Client fields projected into an order detail
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// One order line joined to its product's display data
#[derive(Debug, Clone)]
pub struct OrderItemLine {
    pub item: OrderItem,
    pub product_name: String,
    pub img_url: Option<String>,
}

/// Everything the detail endpoint needs, assembled by the repository in one
/// set of queries
#[derive(Debug, Clone)]
pub struct OrderDetail {
    pub order: Order,
    pub client: ClientInfo,
    pub payment: Option<Payment>,
    pub items: Vec<OrderItemLine>,
}

/// Row shape of the paged order listing
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderSummaryDto {
    pub id: Option<i64>,
    pub moment: DateTime<Utc>,
    pub status: OrderStatus,
    pub client_id: i64,
}

impl From<Order> for OrderSummaryDto {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            moment: order.moment,
            status: order.status,
            client_id: order.client_id,
        }
    }
}

/// Client projection inside an order detail
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClientDto {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Payment projection inside an order detail
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PaymentDto {
    pub id: Option<i64>,
    pub moment: DateTime<Utc>,
}

/// Order line projection with its computed subtotal
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderItemDto {
    pub product_id: i64,
    pub name: String,
    pub img_url: Option<String>,
    pub price: f64,
    pub quantity: i32,
    pub subtotal: f64,
}

/// Full order projection: client, payment, lines and the computed total
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct OrderDto {
    pub id: Option<i64>,
    pub moment: DateTime<Utc>,
    pub status: OrderStatus,
    pub client: ClientDto,
    pub payment: Option<PaymentDto>,
    pub items: Vec<OrderItemDto>,
    pub total: f64,
}

impl From<OrderDetail> for OrderDto {
    fn from(detail: OrderDetail) -> Self {
        let items: Vec<OrderItemDto> = detail
            .items
            .into_iter()
            .map(|line| OrderItemDto {
                product_id: line.item.product_id.unwrap_or(0),
                name: line.product_name,
                img_url: line.img_url,
                price: line.item.price,
                quantity: line.item.quantity,
                subtotal: line.item.subtotal(),
            })
            .collect();

        let total = items.iter().map(|item| item.subtotal).sum();

        Self {
            id: detail.order.id,
            moment: detail.order.moment,
            status: detail.order.status,
            client: ClientDto {
                id: detail.client.id,
                name: detail.client.name,
                email: detail.client.email,
            },
            payment: detail.payment.map(|payment| PaymentDto {
                id: payment.id,
                moment: payment.moment,
            }),
            items,
            total,
        }
    }
}
