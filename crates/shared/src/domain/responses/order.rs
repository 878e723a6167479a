use crate::model::{OrderDetail, OrderItem, OrderStatus, OrderUser, ShippingAddress};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<OrderUser> for OrderUserResponse {
    fn from(value: OrderUser) -> Self {
        OrderUserResponse {
            id: value.id,
            name: value.name,
            email: value.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItemResponse {
    pub product_id: Uuid,
    pub quantity: i32,
    /// Unit price captured when the order was placed.
    pub price: Decimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user: Option<OrderUserResponse>,
    pub items: Vec<OrderItemResponse>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub shipping_address: Option<ShippingAddress>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<OrderDetail> for OrderResponse {
    fn from(value: OrderDetail) -> Self {
        let OrderDetail { order, items, user } = value;

        OrderResponse {
            id: order.id,
            user: user.map(OrderUserResponse::from),
            items: items.into_iter().map(OrderItemResponse::from).collect(),
            total: order.total,
            status: order.status,
            shipping_address: order.shipping_address.map(|address| address.0),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}
