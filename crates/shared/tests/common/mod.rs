use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Hashing, JwtConfig},
    repository::{MemoryStore, Repositories},
    service::TransitionPolicy,
    state::AppState,
};
use std::sync::Arc;

pub async fn state_with(policy: TransitionPolicy) -> AppState {
    let jwt = Arc::new(JwtConfig::new("test-secret", 1)) as DynJwtService;
    let hash = Arc::new(Hashing::new(4)) as DynHashing;

    AppState::from_parts(Repositories::memory(MemoryStore::new()), jwt, hash, policy).await
}
