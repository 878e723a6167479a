use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Cart storage error: {0}")]
    Storage(String),

    #[error("Stored cart is not valid JSON: {0}")]
    Corrupt(#[from] serde_json::Error),

    #[error("No cart entry at index {index} (cart has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Quantity must be at least 1, got {0}")]
    InvalidQuantity(i32),

    #[error("Product {0} is out of stock")]
    OutOfStock(Uuid),

    #[error("Cart is empty")]
    EmptyCart,
}
