//! Shared building blocks for the kvstore crates: wire types, logging setup,
//! Prometheus metrics and the admin listener.

pub mod admin_http;
pub mod metrics;
pub mod types;
pub mod utils;
