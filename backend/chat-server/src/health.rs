use chat_ws::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// GET /health - Health check with hub status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let stats = state.hub.stats();
    let shutting_down = state.shutdown.is_shutdown();

    let health = json!({
        "status": if shutting_down { "shutting_down" } else { "healthy" },
        "version": env!("CARGO_PKG_VERSION"),
        "hub": stats,
        "store": {
            "messages": state.hub.store().len(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe (ready to accept traffic?)
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.shutdown.is_shutdown() {
        return (StatusCode::SERVICE_UNAVAILABLE, "Shutting down").into_response();
    }
    (StatusCode::OK, "Ready").into_response()
}
