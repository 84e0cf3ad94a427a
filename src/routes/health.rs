//! Health check endpoint for container orchestration.
//!
//! Provides a simple liveness probe that reports service status and the
//! published service version. Used by Kubernetes, ECS, systemd, and load
//! balancers to verify the service is alive.

use axum::Json;
use serde_json::json;

use crate::config::SERVICE_VERSION;

/// Health check handler.
///
/// Reports `{"status": "healthy", "version": "1.0"}` to indicate the service
/// is running. This is a liveness probe - it only checks that the process can
/// respond to HTTP.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "version": SERVICE_VERSION,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_healthy_with_version() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], "1.0");
    }

    #[tokio::test]
    async fn health_body_serializes_exactly() {
        let Json(body) = health().await;
        assert_eq!(body.to_string(), r#"{"status":"healthy","version":"1.0"}"#);
    }
}
