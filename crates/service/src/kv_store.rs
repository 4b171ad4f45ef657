use crate::errors::ServiceError;
use async_trait::async_trait;

/// Trait abstraction for the key-value storage behind the HTTP handlers.
/// Every operation is atomic with respect to the others.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// All stored keys, in no particular order.
    async fn list_keys(&self) -> Vec<String>;
    async fn get(&self, key: &str) -> Result<String, ServiceError>;
    /// Insert or overwrite.
    async fn put(&self, key: String, value: String);
    /// Remove `key` if present; returns whether it existed.
    async fn delete(&self, key: &str) -> bool;
}
