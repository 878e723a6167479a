use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use serde_json::Value;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Hashing, JwtConfig},
    model::UserRole,
    repository::{MemoryStore, Repositories},
    service::TransitionPolicy,
    state::AppState,
};
use std::sync::Arc;
use storefront::handler::AppRouter;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub async fn new(policy: TransitionPolicy) -> Self {
        let jwt = Arc::new(JwtConfig::new("test-secret", 1)) as DynJwtService;
        let hash = Arc::new(Hashing::new(4)) as DynHashing;
        let state =
            AppState::from_parts(Repositories::memory(MemoryStore::new()), jwt, hash, policy).await;

        Self {
            router: AppRouter::build(state.clone()),
            state,
        }
    }

    pub fn token(&self, role: UserRole) -> String {
        self.state
            .jwt_config
            .generate_token(Uuid::new_v4(), role)
            .unwrap()
    }

    pub async fn send(
        &self,
        method: &str,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }
}
