use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub discount_price: Option<Decimal>,
    pub stock_quantity: i32,
    pub images: Vec<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// The price a shopper pays: the discount only counts when it undercuts the list price.
    pub fn effective_price(&self) -> Decimal {
        effective_price(self.price, self.discount_price)
    }
}

pub fn effective_price(price: Decimal, discount_price: Option<Decimal>) -> Decimal {
    match discount_price {
        Some(discount) if discount > Decimal::ZERO && discount < price => discount,
        _ => price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_applies_only_below_price() {
        let price = Decimal::new(4000, 2);

        assert_eq!(effective_price(price, None), price);
        assert_eq!(
            effective_price(price, Some(Decimal::new(3500, 2))),
            Decimal::new(3500, 2)
        );
        assert_eq!(effective_price(price, Some(Decimal::new(4500, 2))), price);
        assert_eq!(effective_price(price, Some(Decimal::ZERO)), price);
    }
}
