//! Liveness probe and API index.

use super::state::AppState;
use crate::task::ports::TaskRepository;
use axum::{Json, extract::State, http::StatusCode, http::Uri};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::Serialize;
use serde_json::{Value, json};

const AVAILABLE_ENDPOINTS: [&str; 7] = [
    "GET /",
    "GET /health",
    "GET /tasks",
    "POST /tasks",
    "GET /tasks/{id}",
    "PUT /tasks/{id}",
    "DELETE /tasks/{id}",
];

/// Body returned by `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always `"OK"` while the process serves requests.
    pub status: &'static str,
    /// Time the probe was answered.
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started.
    pub uptime: f64,
    /// Deployment environment name.
    pub environment: &'static str,
}

/// `GET /health`
pub async fn health<R, C>(State(state): State<AppState<R, C>>) -> Json<HealthResponse>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Json(HealthResponse {
        status: "OK",
        timestamp: Utc::now(),
        uptime: state.uptime().as_secs_f64(),
        environment: state.environment().as_str(),
    })
}

/// `GET /`
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "Tasks API",
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/health",
        "endpoints": { "tasks": "/tasks" },
    }))
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": "Not Found",
            "message": format!("Route {uri} not found"),
            "path": uri.path(),
            "timestamp": Utc::now(),
            "availableEndpoints": AVAILABLE_ENDPOINTS,
        })),
    )
}
