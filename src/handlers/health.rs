//! Operational endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::store::UserStore;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
    pub version: String,
}

pub async fn root() -> &'static str {
    "Users API Server"
}

/// GET /health - Report whether the backing store is reachable
pub async fn health_check(State(store): State<Arc<dyn UserStore>>) -> Json<HealthResponse> {
    let (status, store_status) = match store.ping().await {
        Ok(()) => ("healthy", format!("{}: connected", store.backend_name())),
        Err(e) => {
            tracing::warn!(error = %e, "Store health check failed");
            ("unhealthy", format!("{}: error: {}", store.backend_name(), e))
        }
    };

    Json(HealthResponse {
        status: status.to_string(),
        store: store_status,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
