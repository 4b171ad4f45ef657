//! Service layer holding the key-value store.
//! - `kv_store` defines the storage seam the HTTP layer depends on.
//! - `storage` contains the in-memory implementation.

pub mod errors;
pub mod kv_store;
pub mod storage;
