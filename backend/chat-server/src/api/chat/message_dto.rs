use chat_core::Message;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Wire form of a message, used by SSE events and the history endpoint
#[derive(Debug, Clone, Serialize)]
pub struct MessageDto {
    pub sender: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&Message> for MessageDto {
    fn from(message: &Message) -> Self {
        Self {
            sender: message.sender().to_string(),
            content: message.content().to_string(),
            timestamp: message.timestamp(),
        }
    }
}
