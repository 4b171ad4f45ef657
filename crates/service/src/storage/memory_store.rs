use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use common::metrics::{STORE_KEYS, STORE_OPERATIONS_TOTAL};
use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::ServiceError;
use crate::kv_store::KvStore;

/// In-memory key-value map guarded by a single exclusive lock.
///
/// Reads and writes all take the same mutex, so at most one operation touches
/// the map at a time. Nothing is persisted; the contents live as long as the
/// last `Arc` to the store.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// List all keys. Order is whatever the map iterates in.
    pub async fn list_keys(&self) -> Vec<String> {
        let map = self.inner.lock().await;
        STORE_OPERATIONS_TOTAL.with_label_values(&["list"]).inc();
        map.keys().cloned().collect()
    }

    pub async fn get(&self, key: &str) -> Result<String, ServiceError> {
        let map = self.inner.lock().await;
        STORE_OPERATIONS_TOTAL.with_label_values(&["get"]).inc();
        map.get(key).cloned().ok_or_else(|| ServiceError::not_found(key))
    }

    /// Insert or overwrite the value for `key`.
    pub async fn put(&self, key: String, value: String) {
        let mut map = self.inner.lock().await;
        STORE_OPERATIONS_TOTAL.with_label_values(&["put"]).inc();
        let replaced = map.insert(key, value).is_some();
        if !replaced {
            STORE_KEYS.inc();
        }
        debug!(replaced, keys = map.len(), "put");
    }

    /// Remove `key`; returns whether an entry existed. Removing an absent key
    /// leaves the map untouched.
    pub async fn delete(&self, key: &str) -> bool {
        let mut map = self.inner.lock().await;
        STORE_OPERATIONS_TOTAL.with_label_values(&["delete"]).inc();
        let existed = map.remove(key).is_some();
        if existed {
            STORE_KEYS.dec();
        }
        existed
    }

    /// Number of entries in this store. `STORE_KEYS` is the sum over every
    /// store in the process.
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn list_keys(&self) -> Vec<String> {
        self.list_keys().await
    }

    async fn get(&self, key: &str) -> Result<String, ServiceError> {
        self.get(key).await
    }

    async fn put(&self, key: String, value: String) {
        self.put(key, value).await
    }

    async fn delete(&self, key: &str) -> bool {
        self.delete(key).await
    }
}
