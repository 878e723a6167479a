mod command;
mod policy;
mod query;

pub use self::policy::TransitionPolicy;

use self::command::{OrderCommandService, OrderCommandServiceDeps};
use self::query::OrderQueryService;
use crate::abstract_trait::{
    DynOrderCommandRepository, DynOrderCommandService, DynOrderQueryRepository,
    DynOrderQueryService, DynProductQueryRepository,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct OrderService {
    pub query: DynOrderQueryService,
    pub command: DynOrderCommandService,
}

impl fmt::Debug for OrderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderService")
            .field("query", &"Arc<dyn OrderQueryServiceTrait>")
            .field("command", &"Arc<dyn OrderCommandServiceTrait>")
            .finish()
    }
}

#[derive(Clone)]
pub struct OrderServiceDeps {
    pub query: DynOrderQueryRepository,
    pub command: DynOrderCommandRepository,
    pub product_query: DynProductQueryRepository,
    pub policy: TransitionPolicy,
    pub registry: Arc<Mutex<Registry>>,
}

impl OrderService {
    pub async fn new(deps: OrderServiceDeps) -> Self {
        let OrderServiceDeps {
            query,
            command,
            product_query,
            policy,
            registry,
        } = deps;

        let query_service = Arc::new(OrderQueryService::new(query.clone(), &registry).await)
            as DynOrderQueryService;

        let command_deps = OrderCommandServiceDeps {
            query,
            command,
            product_query,
            policy,
        };
        let command_service = Arc::new(OrderCommandService::new(command_deps, &registry).await)
            as DynOrderCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
