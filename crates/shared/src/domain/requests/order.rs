use crate::model::{OrderStatus, ShippingAddress};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct OrderItemRequest {
    pub product_id: Uuid,

    #[validate(range(min = 1, max = 10_000, message = "Quantity must be between 1 and 10000"))]
    #[schema(example = 2)]
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateOrderRequest {
    /// Absent for guest checkout.
    #[serde(default)]
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, message = "Order must contain at least one item"), nested)]
    pub items: Vec<OrderItemRequest>,

    #[validate(nested)]
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub status: Option<OrderStatus>,

    #[validate(nested)]
    #[serde(default)]
    pub shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

/// Line item with its unit price snapshotted at order time.
#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: Uuid,
    pub quantity: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub user_id: Option<Uuid>,
    pub items: Vec<NewOrderItem>,
    pub total: Decimal,
    pub shipping_address: Option<ShippingAddress>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_order_is_rejected() {
        let req: CreateOrderRequest = serde_json::from_value(json!({ "items": [] })).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let req: CreateOrderRequest = serde_json::from_value(json!({
            "items": [{ "product_id": Uuid::new_v4(), "quantity": 0 }]
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn quantity_is_capped() {
        let at_cap = OrderItemRequest {
            product_id: Uuid::new_v4(),
            quantity: crate::domain::requests::MAX_ITEM_QUANTITY,
        };
        assert!(at_cap.validate().is_ok());

        let over = OrderItemRequest {
            quantity: at_cap.quantity + 1,
            ..at_cap
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn shipping_email_is_checked() {
        let req: CreateOrderRequest = serde_json::from_value(json!({
            "items": [{ "product_id": Uuid::new_v4(), "quantity": 1 }],
            "shipping_address": {
                "name": "Jane", "email": "not-an-email",
                "address": "1 Main St", "city": "Lahore", "zip": "54000"
            }
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let parsed = serde_json::from_value::<UpdateOrderStatusRequest>(json!({ "status": "lost" }));
        assert!(parsed.is_err());
    }
}
