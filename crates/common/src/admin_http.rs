//! Admin HTTP listener
//!
//! Exposes `/healthz` and `/metrics` on a port separate from the key space,
//! with metrics provided by the caller.

use axum::http::StatusCode;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tracing::info;

pub type MetricsFn = fn() -> (StatusCode, String);

async fn healthz() -> &'static str {
    "OK"
}

pub fn admin_router(metrics_fn: MetricsFn) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(move || async move { metrics_fn() }))
}

/// Bind `addr` and serve the admin router until the listener fails.
pub async fn serve_admin(addr: &str, metrics_fn: MetricsFn) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "admin server listening");
    axum::serve(listener, admin_router(metrics_fn)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn fake_metrics() -> (StatusCode, String) {
        (StatusCode::OK, "fake_metric 1\n".to_string())
    }

    #[tokio::test]
    async fn healthz_returns_ok() -> anyhow::Result<()> {
        let resp = admin_router(fake_metrics)
            .oneshot(Request::builder().uri("/healthz").body(Body::empty())?)
            .await?;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
        assert_eq!(&body[..], b"OK");
        Ok(())
    }

    #[tokio::test]
    async fn metrics_delegates_to_callback() -> anyhow::Result<()> {
        let resp = admin_router(fake_metrics)
            .oneshot(Request::builder().uri("/metrics").body(Body::empty())?)
            .await?;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX).await?;
        assert_eq!(&body[..], b"fake_metric 1\n");
        Ok(())
    }
}
