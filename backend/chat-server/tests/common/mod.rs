#![allow(dead_code)]

//! Test infrastructure for chat-server API tests

use chat_db::MessageStore;
use chat_ws::{
    AppState, BroadcastHub, ConnectionConfig, HubConfig, Metrics, ShutdownCoordinator,
};

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;

/// Create AppState for testing
pub fn create_test_app_state() -> AppState {
    create_test_app_state_with_hub(HubConfig::default())
}

pub fn create_test_app_state_with_hub(hub_config: HubConfig) -> AppState {
    let metrics = Metrics::new();

    AppState {
        hub: BroadcastHub::new(MessageStore::new(), hub_config, metrics.clone()),
        metrics,
        shutdown: ShutdownCoordinator::new(),
        config: ConnectionConfig::default(),
        sse_keep_alive: Duration::from_secs(15),
    }
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
