mod auth;
mod category;
mod order;
mod product;
mod user;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::category::CategoryService;
pub use self::order::{OrderService, OrderServiceDeps, TransitionPolicy};
pub use self::product::ProductService;
pub use self::user::UserService;
