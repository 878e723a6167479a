use crate::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionManager, Hashing, JwtConfig, StoreBackend},
    di::{DependenciesInject, DependenciesInjectDeps},
    repository::{MemoryStore, Repositories},
    service::TransitionPolicy,
};
use anyhow::{Context, Result};
use prometheus_client::registry::Registry;
use std::{fmt, sync::Arc};
use tokio::sync::Mutex;
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
    pub registry: Arc<Mutex<Registry>>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .field("jwt_config", &"<dyn JwtService>")
            .finish()
    }
}

impl AppState {
    /// Connects the configured store, applying migrations when asked to.
    pub async fn new(config: &Config) -> Result<Self> {
        let repositories = match config.store_backend {
            StoreBackend::Postgres => {
                let url = config
                    .database_url
                    .as_deref()
                    .context("DATABASE_URL is required for the postgres store")?;

                let pool = ConnectionManager::new_pool(url, config.db_max_conn).await?;

                if config.run_migrations {
                    ConnectionManager::run_migrations(&pool).await?;
                }

                Repositories::postgres(pool)
            }
            StoreBackend::Memory => {
                info!("🧪 Using in-memory store; data is lost on exit");
                Repositories::memory(MemoryStore::new())
            }
        };

        let jwt_config = Arc::new(JwtConfig::new(
            &config.jwt_secret,
            config.jwt_expires_in_hours,
        )) as DynJwtService;
        let hash = Arc::new(Hashing::new(config.bcrypt_cost)) as DynHashing;

        Ok(Self::from_parts(
            repositories,
            jwt_config,
            hash,
            TransitionPolicy::from_flag(config.enforce_order_transitions),
        )
        .await)
    }

    pub async fn from_parts(
        repositories: Repositories,
        jwt_config: DynJwtService,
        hash: DynHashing,
        transition_policy: TransitionPolicy,
    ) -> Self {
        let registry = Arc::new(Mutex::new(Registry::default()));

        let deps = DependenciesInjectDeps {
            repositories,
            hash,
            jwt_config: jwt_config.clone(),
            registry: registry.clone(),
            transition_policy,
        };

        let di_container = DependenciesInject::new(deps).await;

        Self {
            di_container,
            jwt_config,
            registry,
        }
    }
}
