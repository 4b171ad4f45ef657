use std::sync::Arc;

use axum::Router;
use common::{admin_http, metrics};
use configs::{AdminConfig, AppConfig};
use service::kv_store::KvStore;
use service::storage::memory_store::MemoryStore;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::routes::{self, AppState};

/// Build the application router over a fresh in-memory store.
pub fn build_app() -> Router {
    let store: Arc<dyn KvStore> = MemoryStore::new();
    routes::build_router(AppState::new(store))
}

fn spawn_admin(admin: &AdminConfig) {
    let addr = admin.addr.clone();
    tokio::spawn(async move {
        if let Err(e) = admin_http::serve_admin(&addr, metrics::encode_metrics).await {
            error!(service = "server", event = "admin_failed", %addr, error = %e, "admin server stopped");
        }
    });
}

/// Public entry: construct the store, bind the listener and serve until the
/// listener fails. The store lives exactly as long as this future.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    if config.admin.enabled {
        spawn_admin(&config.admin);
    }

    let app = build_app();

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting kvstore server");
    axum::serve(listener, app).await?;
    Ok(())
}
