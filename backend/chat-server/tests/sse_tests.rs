//! Integration tests for the SSE stream
mod common;

use crate::common::{create_test_app_state, get};

use chat_core::Message;

use axum::body::Body;
use axum::http::StatusCode;
use http_body_util::BodyExt;
use tokio::time::{Duration, timeout};
use tower::ServiceExt;

use chat_server::build_router;

/// Read body frames until `needle` shows up
async fn read_until(body: &mut Body, needle: &str) -> String {
    let mut text = String::new();
    while !text.contains(needle) {
        let frame = timeout(Duration::from_secs(2), body.frame())
            .await
            .expect("timed out waiting for SSE data")
            .expect("stream ended early")
            .unwrap();
        if let Ok(data) = frame.into_data() {
            text.push_str(std::str::from_utf8(&data).unwrap());
        }
    }
    text
}

#[tokio::test]
async fn given_open_stream_when_message_published_then_event_with_sequence_id() {
    // Given
    let state = create_test_app_state();
    let response = build_router(state.clone())
        .oneshot(get("/chat/stream"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "text/event-stream"
    );
    assert_eq!(state.hub.subscriber_count(), 1);

    // When
    state
        .hub
        .publish(Message::new("alice", "hello").unwrap());

    // Then
    let mut body = response.into_body();
    let text = read_until(&mut body, "\n\n").await;
    assert!(text.contains("id: 1"));
    assert!(text.contains(r#""sender":"alice""#));
    assert!(text.contains(r#""content":"hello""#));
    assert!(text.contains(r#""timestamp":"#));
}

#[tokio::test]
async fn given_open_stream_when_hub_closed_then_stream_ends_after_backlog() {
    let state = create_test_app_state();
    let response = build_router(state.clone())
        .oneshot(get("/chat/stream"))
        .await
        .unwrap();
    state
        .hub
        .publish(Message::new("alice", "final").unwrap());

    state.hub.close_all();

    let collected = timeout(Duration::from_secs(2), response.into_body().collect())
        .await
        .expect("stream should end")
        .unwrap()
        .to_bytes();
    let text = String::from_utf8(collected.to_vec()).unwrap();
    assert!(text.contains(r#""content":"final""#));
}

#[tokio::test]
async fn given_open_stream_when_client_disconnects_then_subscription_removed() {
    let state = create_test_app_state();
    let response = build_router(state.clone())
        .oneshot(get("/chat/stream"))
        .await
        .unwrap();
    assert_eq!(state.hub.subscriber_count(), 1);

    drop(response);

    assert_eq!(state.hub.subscriber_count(), 0);
}
