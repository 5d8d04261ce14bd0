//! Liveness endpoint

use axum::Json;
use chrono::Utc;
use serde::Serialize;

/// Health report returned by `/health`.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always `"healthy"` while the process is serving requests.
    pub status: &'static str,
    /// Unix timestamp of the check.
    pub timestamp: i64,
}

/// Report gateway liveness.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy", timestamp: Utc::now().timestamp() })
}
