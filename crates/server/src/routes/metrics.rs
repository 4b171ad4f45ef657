use axum::{extract::Request, middleware::Next, response::Response};
use common::metrics::HTTP_REQUESTS_TOTAL;

/// Middleware: count every request by method and response status.
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let response = next.run(req).await;
    HTTP_REQUESTS_TOTAL
        .with_label_values(&[method.as_str(), response.status().as_str()])
        .inc();
    response
}
