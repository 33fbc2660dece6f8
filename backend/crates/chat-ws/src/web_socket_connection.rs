use crate::{
    BroadcastHub, ConnectionConfig, ConnectionId, Metrics, Result as WsErrorResult, ShutdownGuard,
    WsError, error_frame, parse_chat_frame,
};

use std::ops::ControlFlow;
use std::panic::Location;

use axum::extract::ws::{Message, WebSocket};
use error_location::ErrorLocation;
use futures::{SinkExt, StreamExt};
use tokio::sync::mpsc;

/// Manages a single duplex chat connection.
///
/// Inbound frames are published to the hub and echoed back to the same peer.
/// The connection does not receive broadcasts itself.
pub struct WebSocketConnection {
    connection_id: ConnectionId,
    config: ConnectionConfig,
    metrics: Metrics,
    hub: BroadcastHub,
}

impl WebSocketConnection {
    pub fn new(
        connection_id: ConnectionId,
        config: ConnectionConfig,
        metrics: Metrics,
        hub: BroadcastHub,
    ) -> Self {
        Self {
            connection_id,
            config,
            metrics,
            hub,
        }
    }

    /// Handle the WebSocket connection lifecycle
    pub async fn handle(
        self,
        socket: WebSocket,
        mut shutdown_guard: ShutdownGuard,
    ) -> WsErrorResult<()> {
        log::info!("WebSocket connection {} established", self.connection_id);
        self.metrics.connection_established();

        let (mut ws_sender, mut ws_receiver) = socket.split();

        // Bounded so a slow peer only ever stalls its own connection
        let (tx, mut rx) = mpsc::channel::<Message>(self.config.send_buffer_size);

        let send_task = tokio::spawn(async move {
            while let Some(msg) = rx.recv().await {
                if ws_sender.send(msg).await.is_err() {
                    break;
                }
            }
            let _ = ws_sender.close().await;
        });

        let result = loop {
            tokio::select! {
                msg = ws_receiver.next() => {
                    match msg {
                        Some(Ok(msg)) => match self.handle_client_message(msg, &tx).await {
                            Ok(ControlFlow::Continue(())) => {}
                            Ok(ControlFlow::Break(())) => break Ok(()),
                            Err(e) => {
                                log::error!(
                                    "Error handling message from connection {}: {}",
                                    self.connection_id,
                                    e
                                );
                                break Err(e);
                            }
                        },
                        Some(Err(e)) => {
                            log::error!(
                                "WebSocket error on connection {}: {}",
                                self.connection_id,
                                e
                            );
                            break Err(WsError::ConnectionClosed {
                                reason: format!("WebSocket error: {}", e),
                                location: ErrorLocation::from(Location::caller()),
                            });
                        }
                        None => {
                            log::info!("Connection {} closed by client", self.connection_id);
                            break Ok(());
                        }
                    }
                }

                _ = shutdown_guard.wait() => {
                    log::info!("Shutting down connection {} gracefully", self.connection_id);
                    let _ = tx.send(Message::Close(None)).await;
                    break Ok(());
                }
            }
        };

        drop(tx);
        let _ = send_task.await;

        self.metrics
            .connection_closed(if result.is_ok() { "normal" } else { "error" });
        log::info!("WebSocket connection {} closed", self.connection_id);

        result
    }

    async fn handle_client_message(
        &self,
        msg: Message,
        tx: &mpsc::Sender<Message>,
    ) -> WsErrorResult<ControlFlow<()>> {
        match msg {
            Message::Text(text) => {
                self.metrics.frame_received("text");
                self.handle_text(text.as_str(), tx).await?;
            }
            Message::Binary(data) => {
                self.metrics.frame_received("binary");
                match std::str::from_utf8(&data) {
                    Ok(text) => self.handle_text(text, tx).await?,
                    Err(_) => {
                        self.reject(crate::INVALID_JSON_FORMAT, "binary frame is not UTF-8", tx)
                            .await?
                    }
                }
            }
            Message::Ping(data) => {
                Self::enqueue(tx, Message::Pong(data)).await?;
            }
            Message::Pong(_) => {}
            Message::Close(_) => {
                log::info!("Received close frame from connection {}", self.connection_id);
                return Ok(ControlFlow::Break(()));
            }
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Publish a chat frame and echo it back, or answer with an error frame
    async fn handle_text(&self, text: &str, tx: &mpsc::Sender<Message>) -> WsErrorResult<()> {
        let frame = match parse_chat_frame(text) {
            Ok(frame) => frame,
            Err(e) => return self.reject(e.client_reason(), &e.to_string(), tx).await,
        };

        let message = match chat_core::Message::new(frame.sender.as_str(), frame.content.as_str())
        {
            Ok(message) => message,
            Err(e) => {
                return self
                    .reject(crate::INVALID_MESSAGE_FORMAT, &e.to_string(), tx)
                    .await;
            }
        };

        let result = self.hub.publish(message);
        log::debug!(
            "Connection {} published message {} ({})",
            self.connection_id,
            result.sequence(),
            if result.is_success() { "delivered" } else { "overflowed" }
        );

        match frame.echo() {
            Ok(echo) => Self::enqueue(tx, Message::Text(echo.into())).await,
            Err(e) => self.reject(e.client_reason(), &e.to_string(), tx).await,
        }
    }

    async fn reject(
        &self,
        reason: &'static str,
        detail: &str,
        tx: &mpsc::Sender<Message>,
    ) -> WsErrorResult<()> {
        log::warn!(
            "Rejected frame on connection {}: {}",
            self.connection_id,
            detail
        );
        self.metrics.frame_rejected(match reason {
            crate::INVALID_JSON_FORMAT => "invalid_json",
            crate::INVALID_MESSAGE_FORMAT => "invalid_message",
            _ => "serialization",
        });
        Self::enqueue(tx, Message::Text(error_frame(reason).into())).await
    }

    #[track_caller]
    fn enqueue(
        tx: &mpsc::Sender<Message>,
        msg: Message,
    ) -> impl Future<Output = WsErrorResult<()>> + '_ {
        let location = ErrorLocation::from(Location::caller());
        async move {
            tx.send(msg)
                .await
                .map_err(|_| WsError::SendBufferFull { location })
        }
    }
}
