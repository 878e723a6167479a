mod category;
mod memory;
mod order;
mod product;
mod user;

pub use self::category::CategoryRepository;
pub use self::memory::MemoryStore;
pub use self::order::OrderRepository;
pub use self::product::ProductRepository;
pub use self::user::UserRepository;

use crate::{
    abstract_trait::{
        DynCategoryCommandRepository, DynCategoryQueryRepository, DynOrderCommandRepository,
        DynOrderQueryRepository, DynProductCommandRepository, DynProductQueryRepository,
        DynUserCommandRepository, DynUserQueryRepository,
    },
    config::ConnectionPool,
};
use std::sync::Arc;

/// Every repository the services need, backed by one store.
#[derive(Clone)]
pub struct Repositories {
    pub product: ProductRepository,
    pub category: CategoryRepository,
    pub order: OrderRepository,
    pub user: UserRepository,
}

impl Repositories {
    pub fn postgres(pool: ConnectionPool) -> Self {
        Self {
            product: ProductRepository::new(pool.clone()),
            category: CategoryRepository::new(pool.clone()),
            order: OrderRepository::new(pool.clone()),
            user: UserRepository::new(pool),
        }
    }

    pub fn memory(store: MemoryStore) -> Self {
        let store = Arc::new(store);

        Self {
            product: ProductRepository {
                query: store.clone() as DynProductQueryRepository,
                command: store.clone() as DynProductCommandRepository,
            },
            category: CategoryRepository {
                query: store.clone() as DynCategoryQueryRepository,
                command: store.clone() as DynCategoryCommandRepository,
            },
            order: OrderRepository {
                query: store.clone() as DynOrderQueryRepository,
                command: store.clone() as DynOrderCommandRepository,
            },
            user: UserRepository {
                query: store.clone() as DynUserQueryRepository,
                command: store as DynUserCommandRepository,
            },
        }
    }
}
