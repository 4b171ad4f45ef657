use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use service::kv_store::KvStore;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

pub mod kv;
pub mod metrics;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KvStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }
}

/// Build the key-value router: `GET /` plus `GET|PUT|DELETE /{key}`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(kv::list_keys))
        .route(
            "/:key",
            get(kv::get_value).put(kv::put_value).delete(kv::delete_value),
        )
        .with_state(state)
        .layer(middleware::from_fn(metrics::track_metrics))
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request with method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
