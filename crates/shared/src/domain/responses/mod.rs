mod api;
mod category;
mod order;
mod product;
mod token;
mod user;

pub use self::api::ApiResponse;
pub use self::category::CategoryResponse;
pub use self::order::{OrderItemResponse, OrderResponse, OrderUserResponse};
pub use self::product::ProductResponse;
pub use self::token::LoginResponse;
pub use self::user::UserResponse;
