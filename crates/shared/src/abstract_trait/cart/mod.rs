use crate::errors::CartError;
use async_trait::async_trait;

/// Key-value persistence behind a cart.
#[async_trait]
pub trait CartStorage: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CartError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), CartError>;
}
