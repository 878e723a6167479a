mod auth;
mod cart;
mod category;
mod hashing;
mod jwt;
mod order;
mod product;
mod user;

pub use self::auth::{AuthServiceTrait, DynAuthService};
pub use self::cart::CartStorage;
pub use self::category::{
    CategoryCommandRepositoryTrait, CategoryCommandServiceTrait, CategoryQueryRepositoryTrait,
    CategoryQueryServiceTrait, DynCategoryCommandRepository, DynCategoryCommandService,
    DynCategoryQueryRepository, DynCategoryQueryService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, OrderCommandRepositoryTrait, OrderCommandServiceTrait,
    OrderQueryRepositoryTrait, OrderQueryServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, DynUserQueryService,
    UserCommandRepositoryTrait, UserQueryRepositoryTrait, UserQueryServiceTrait,
};
