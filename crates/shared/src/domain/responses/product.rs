use crate::model::Product;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    /// Price charged at checkout.
    pub effective_price: Decimal,
    pub stock_quantity: i32,
    pub images: Vec<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            effective_price: value.effective_price(),
            id: value.id,
            name: value.name,
            description: value.description,
            price: value.price,
            discount_price: value.discount_price,
            stock_quantity: value.stock_quantity,
            images: value.images,
            category: value.category,
            subcategory: value.subcategory,
            featured: value.featured,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}
