use crate::{
    abstract_trait::{DynAuthService, DynHashing, DynJwtService},
    repository::Repositories,
    service::{
        AuthService, AuthServiceDeps, CategoryService, OrderService, OrderServiceDeps,
        ProductService, TransitionPolicy, UserService,
    },
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct DependenciesInject {
    pub auth_service: DynAuthService,
    pub user_service: UserService,
    pub product_service: ProductService,
    pub category_service: CategoryService,
    pub order_service: OrderService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("auth_service", &"<AuthService>")
            .field("user_service", &self.user_service)
            .field("product_service", &self.product_service)
            .field("category_service", &self.category_service)
            .field("order_service", &self.order_service)
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub repositories: Repositories,
    pub hash: DynHashing,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
    pub transition_policy: TransitionPolicy,
}

impl DependenciesInject {
    pub async fn new(deps: DependenciesInjectDeps) -> Self {
        let DependenciesInjectDeps {
            repositories,
            hash,
            jwt_config,
            registry,
            transition_policy,
        } = deps;

        let Repositories {
            product,
            category,
            order,
            user,
        } = repositories;

        let auth_deps = AuthServiceDeps {
            hash,
            jwt: jwt_config,
            query: user.query.clone(),
            command: user.command.clone(),
            registry: registry.clone(),
        };
        let auth_service = Arc::new(AuthService::new(auth_deps).await) as DynAuthService;

        let user_service = UserService::new(user.query, &registry).await;

        let order_deps = OrderServiceDeps {
            query: order.query,
            command: order.command,
            product_query: product.query.clone(),
            policy: transition_policy,
            registry: registry.clone(),
        };
        let order_service = OrderService::new(order_deps).await;

        let product_service =
            ProductService::new(product.query, product.command, &registry).await;

        let category_service =
            CategoryService::new(category.query, category.command, &registry).await;

        Self {
            auth_service,
            user_service,
            product_service,
            category_service,
            order_service,
        }
    }
}
