use axum::http::StatusCode;
use once_cell::sync::Lazy;
use prometheus::{
    register_int_counter_vec, register_int_gauge, Encoder, IntCounterVec, IntGauge, TextEncoder,
};

// Prometheus metrics (default registry)
pub static HTTP_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "kvstore_http_requests_total",
        "Total HTTP requests handled, by method and status",
        &["method", "status"]
    )
    .expect("register http_requests_total")
});

pub static STORE_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "kvstore_store_operations_total",
        "Total store operations, by operation",
        &["op"]
    )
    .expect("register store_operations_total")
});

pub static STORE_KEYS: Lazy<IntGauge> = Lazy::new(|| {
    register_int_gauge!("kvstore_store_keys", "Number of keys currently stored")
        .expect("register store_keys")
});

pub fn encode_metrics() -> (StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (StatusCode::OK, String::from_utf8(buffer).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_output_contains_touched_metrics() {
        HTTP_REQUESTS_TOTAL.with_label_values(&["GET", "200"]).inc();
        STORE_KEYS.set(3);
        let (status, body) = encode_metrics();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("kvstore_http_requests_total"));
        assert!(body.contains("kvstore_store_keys"));
    }
}
