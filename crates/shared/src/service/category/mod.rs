mod command;
mod query;

use self::command::CategoryCommandService;
use self::query::CategoryQueryService;
use crate::abstract_trait::{
    DynCategoryCommandRepository, DynCategoryCommandService, DynCategoryQueryRepository,
    DynCategoryQueryService,
};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct CategoryService {
    pub query: DynCategoryQueryService,
    pub command: DynCategoryCommandService,
}

impl fmt::Debug for CategoryService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryService")
            .field("query", &"Arc<dyn CategoryQueryServiceTrait>")
            .field("command", &"Arc<dyn CategoryCommandServiceTrait>")
            .finish()
    }
}

impl CategoryService {
    pub async fn new(
        query: DynCategoryQueryRepository,
        command: DynCategoryCommandRepository,
        registry: &Arc<Mutex<Registry>>,
    ) -> Self {
        let query_service =
            Arc::new(CategoryQueryService::new(query, registry).await) as DynCategoryQueryService;
        let command_service = Arc::new(CategoryCommandService::new(command, registry).await)
            as DynCategoryCommandService;

        Self {
            query: query_service,
            command: command_service,
        }
    }
}
