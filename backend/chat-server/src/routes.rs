use crate::api::error::{ErrorResponse, UNEXPECTED_ERROR_MESSAGE};
use crate::{chat_health, health, message_history, send_message, stream_messages};

use chat_ws::AppState;

use std::any::Any;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Chat endpoints
        .route("/chat/send", post(send_message))
        .route("/chat/stream", get(stream_messages))
        .route("/chat/history", get(message_history))
        .route("/chat/health", get(chat_health))
        // WebSocket endpoint
        .route("/ws/chat", get(chat_ws::handler))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
}

/// Router exposing the Prometheus recorder at `/metrics`
pub fn metrics_router(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || std::future::ready(handle.render())))
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "Unknown panic".to_string()
    };

    log::error!("Handler panicked: {}", details);

    let status = StatusCode::INTERNAL_SERVER_ERROR;
    (
        status,
        Json(ErrorResponse::new(status, UNEXPECTED_ERROR_MESSAGE, details)),
    )
        .into_response()
}
