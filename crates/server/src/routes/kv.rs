use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use common::types::{KeyValueResponse, KeysResponse, PutRequest};
use service::errors::ServiceError;
use tracing::{debug, info};

use crate::errors::ApiError;
use crate::routes::AppState;

/// List every stored key; 404 when the store is empty.
pub async fn list_keys(State(state): State<AppState>) -> Result<Json<KeysResponse>, ApiError> {
    let keys = state.store.list_keys().await;
    if keys.is_empty() {
        return Err(ApiError::NotFound("no keys found".to_string()));
    }
    Ok(Json(KeysResponse { keys }))
}

pub async fn get_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<KeyValueResponse>, ApiError> {
    let value = state.store.get(&key).await?;
    Ok(Json(KeyValueResponse { key, value }))
}

/// Create or overwrite the value for a key.
///
/// The body is decoded whatever the `Content-Type`, and only its first JSON
/// value is read. A body that is not a JSON object (or `null`), or whose
/// `value` is not a string, is answered with 500 and the decoder's message; a
/// missing, `null` or empty `value` is a 400.
pub async fn put_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Bytes,
) -> Result<StatusCode, ApiError> {
    let payload = PutRequest::from_body(&body).map_err(|e| ApiError::Internal(e.to_string()))?;

    let value = match payload.value {
        Some(v) if !v.is_empty() => v,
        _ => {
            debug!(%key, "rejecting put without value");
            return Err(ApiError::BadRequest("bad body".to_string()));
        }
    };

    state.store.put(key.clone(), value).await;
    info!(%key, "value stored");
    Ok(StatusCode::OK)
}

/// Remove a key; 404 when it was not present.
pub async fn delete_value(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !state.store.delete(&key).await {
        return Err(ServiceError::not_found(&key).into());
    }
    info!(%key, "value deleted");
    Ok(StatusCode::OK)
}
