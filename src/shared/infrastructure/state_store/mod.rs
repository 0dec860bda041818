use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StateStoreError {
    #[error("state store unavailable: {0}")]
    Unavailable(String),

    #[error("backend error: {0}")]
    Backend(String),
}

/// Key-value access to a named state store. Values are opaque strings.
///
/// Implementations give no atomicity across a `get` followed by a `set`.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn get(&self, store_name: &str, key: &str) -> Result<Option<String>, StateStoreError>;
    async fn set(&self, store_name: &str, key: &str, value: &str) -> Result<(), StateStoreError>;
}

pub mod dapr;
pub mod in_memory;
