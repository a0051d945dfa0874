//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that returns 200 OK when the process is running.

use axum::Json;
use serde::Serialize;

/// Body returned by the liveness probe.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// Health check handler.
///
/// Always returns `{"status":"ok"}`; request body and headers are ignored.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "ok" })
}
