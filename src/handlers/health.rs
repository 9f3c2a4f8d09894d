use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use super::context::ServerContext;

pub async fn health_handler(State(state): State<ServerContext>) -> (StatusCode, Json<Value>) {
    let reachable = match state.store.ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("database ping failed: {}", e);
            false
        }
    };
    let status = if reachable {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(json!({ "database": { "reachable": reachable } })))
}
