mod category;
mod order;
mod product;
mod user;

pub use self::category::{Category, Subcategory};
pub use self::order::{Order, OrderDetail, OrderItem, OrderStatus, OrderUser, ShippingAddress};
pub use self::product::{Product, effective_price};
pub use self::user::{User, UserRole};
