//! Storage implementations for the service layer.

pub mod memory_store;
