mod auth;
mod category;
mod order;
mod product;
mod validate;

pub use self::auth::{LoginRequest, NewUser, RegisterRequest};
pub use self::category::{CategoryRequest, NewCategory, SubcategoryRequest};
pub use self::order::{
    CreateOrderRequest, NewOrder, NewOrderItem, OrderItemRequest, UpdateOrderRequest,
    UpdateOrderStatusRequest,
};
pub use self::product::{FindAllProducts, ProductRequest};
pub use self::validate::{MAX_ITEM_QUANTITY, MAX_MONEY};
