//! Chat REST and SSE handlers

use crate::{ApiResult, HistoryQuery, MessageDto, SendMessageRequest};

use chat_core::Message;
use chat_ws::AppState;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::{Stream, StreamExt};
use log::{debug, info, warn};

pub const HEALTH_TEXT: &str = "Chat application is running and reactive!";

/// POST /chat/send
///
/// Publish a message. Live-path overflow is logged by the hub and does not
/// change the response.
pub async fn send_message(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let Json(request) = payload?;
    let (sender, content) = request.validate()?;

    info!("Received message from sender: {}", sender);

    let message = Message::new(sender, content)?;
    let result = state.hub.publish(message);
    if !result.is_success() {
        warn!(
            "Message {} stored but not broadcast live",
            result.sequence()
        );
    }

    Ok(StatusCode::OK)
}

/// GET /chat/stream
///
/// One SSE event per published message, `id` = hub sequence number
pub async fn stream_messages(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let subscription = state.hub.subscribe();
    info!("Client connected to message stream ({})", subscription.id());

    let events = subscription.into_stream().map(|delivery| {
        Event::default()
            .id(delivery.sequence.to_string())
            .json_data(MessageDto::from(delivery.message.as_ref()))
    });

    Sse::new(events).keep_alive(KeepAlive::new().interval(state.sse_keep_alive))
}

/// GET /chat/history?limit=N
pub async fn message_history(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<MessageDto>>> {
    let Query(query) = query?;
    let limit = query.limit()?;

    let messages = state.hub.history(limit);
    debug!("Returning {} messages from history", messages.len());

    Ok(Json(
        messages
            .iter()
            .map(|message| MessageDto::from(message.as_ref()))
            .collect(),
    ))
}

/// GET /chat/health
pub async fn chat_health() -> &'static str {
    HEALTH_TEXT
}
