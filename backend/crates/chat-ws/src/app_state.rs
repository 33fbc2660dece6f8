use crate::{
    BroadcastHub, ConnectionConfig, ConnectionId, Metrics, ShutdownCoordinator,
    WebSocketConnection,
};

use std::time::Duration;

use axum::{
    extract::{
        State,
        ws::{WebSocket, WebSocketUpgrade},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, info, warn};

/// Shared application state for HTTP and WebSocket handlers
#[derive(Clone)]
pub struct AppState {
    pub hub: BroadcastHub,
    pub metrics: Metrics,
    pub shutdown: ShutdownCoordinator,
    pub config: ConnectionConfig,
    /// Interval between SSE keep-alive comments
    pub sse_keep_alive: Duration,
}

/// WebSocket upgrade handler
pub async fn handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    if state.shutdown.is_shutdown() {
        warn!("Rejected WebSocket upgrade during shutdown");
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }

    let connection_id = ConnectionId::new();
    info!("Accepted WebSocket upgrade for connection {}", connection_id);

    ws.on_upgrade(move |socket| handle_socket(socket, connection_id, state))
}

async fn handle_socket(socket: WebSocket, connection_id: ConnectionId, state: AppState) {
    let shutdown_guard = state.shutdown.subscribe_guard();

    let connection = WebSocketConnection::new(
        connection_id,
        state.config.clone(),
        state.metrics.clone(),
        state.hub.clone(),
    );

    if let Err(e) = connection.handle(socket, shutdown_guard).await {
        error!("Connection {connection_id} error: {e}");
    }
}
