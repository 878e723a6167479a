//! Shopper-side cart: an ordered list of product snapshots and quantities, persisted
//! as JSON through an injected [`CartStorage`](crate::abstract_trait::CartStorage).

mod storage;
mod store;

pub use self::storage::{FileCartStorage, MemoryCartStorage};
pub use self::store::{CART_KEY, CartItem, CartProduct, CartStore};
