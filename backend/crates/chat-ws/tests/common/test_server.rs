#![allow(dead_code)]

use chat_core::Message;
use chat_db::MessageStore;
use chat_ws::{
    AppState, BroadcastHub, ConnectionConfig, HubConfig, Metrics, OverflowPolicy,
    ShutdownCoordinator,
};

use std::time::Duration;

use axum::{Router, routing::get};
use axum_test::TestServer;

/// Test server with access to AppState for testing
pub struct TestServerWithState {
    pub server: TestServer,
    pub app_state: AppState,
}

pub fn create_hub(capacity: usize, overflow_policy: OverflowPolicy) -> BroadcastHub {
    BroadcastHub::new(
        MessageStore::new(),
        HubConfig {
            max_buffer_size: capacity,
            overflow_policy,
        },
        Metrics::new(),
    )
}

pub fn create_message(sender: &str, content: impl Into<String>) -> Message {
    Message::new(sender, content).expect("test message should be valid")
}

/// Create a TestServer with default hub configuration
pub fn create_test_server() -> TestServerWithState {
    create_test_server_with_hub(BroadcastHub::new(
        MessageStore::new(),
        HubConfig::default(),
        Metrics::new(),
    ))
}

pub fn create_test_server_with_hub(hub: BroadcastHub) -> TestServerWithState {
    let app_state = AppState {
        hub,
        metrics: Metrics::default(),
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
        sse_keep_alive: Duration::from_secs(15),
    };

    let app = Router::new()
        .route("/ws/chat", get(chat_ws::handler))
        .with_state(app_state.clone());

    let server = TestServer::builder()
        .http_transport()
        .build(app)
        .expect("Failed to create test server");

    TestServerWithState { server, app_state }
}
