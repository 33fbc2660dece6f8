#![allow(dead_code)]

use axum_test::{TestServer, TestWebSocket, WsMessage};
use bytes::Bytes;
use serde_json::Value;

/// WebSocket test client wrapper
pub struct WsTestClient {
    ws: TestWebSocket,
}

impl WsTestClient {
    pub async fn connect(server: &TestServer) -> Self {
        let ws = server
            .get_websocket("/ws/chat")
            .await
            .into_websocket()
            .await;

        Self { ws }
    }

    pub async fn send_text(&mut self, text: impl std::fmt::Display) {
        self.ws.send_text(text).await;
    }

    pub async fn send_binary(&mut self, data: impl Into<Bytes>) {
        self.ws.send_message(WsMessage::Binary(data.into())).await;
    }

    pub async fn receive_text(&mut self) -> String {
        self.ws.receive_text().await
    }

    /// Receive a text frame and parse it as JSON
    pub async fn receive_json(&mut self) -> Value {
        let text = self.receive_text().await;
        serde_json::from_str(&text).expect("server frame should be JSON")
    }

    pub async fn close(self) {
        self.ws.close().await;
    }
}
