use crate::{Result as WsErrorResult, WsError};

use std::panic::Location;

use error_location::ErrorLocation;
use serde_json::{Value, json};

pub const INVALID_JSON_FORMAT: &str = "Invalid JSON format";
pub const INVALID_MESSAGE_FORMAT: &str = "Invalid message format";
pub const SERIALIZATION_FAILED: &str = "Message serialization failed";

/// Inbound chat frame from a WebSocket peer
#[derive(Debug, Clone)]
pub struct ChatFrame {
    pub sender: String,
    pub content: String,
    /// The frame exactly as received, echoed back to the peer
    pub raw: Value,
}

impl ChatFrame {
    /// Serialize the inbound object for the echo reply
    #[track_caller]
    pub fn echo(&self) -> WsErrorResult<String> {
        Ok(serde_json::to_string(&self.raw)?)
    }
}

/// Parse a text frame into a chat frame.
///
/// Both `sender` and `content` must be non-blank strings; any extra fields are
/// kept in `raw` and echoed back untouched.
#[track_caller]
pub fn parse_chat_frame(text: &str) -> WsErrorResult<ChatFrame> {
    let raw: Value = serde_json::from_str(text).map_err(|_| WsError::InvalidFrame {
        reason: INVALID_JSON_FORMAT,
        location: ErrorLocation::from(Location::caller()),
    })?;

    let sender = required_text(&raw, "sender")?;
    let content = required_text(&raw, "content")?;

    Ok(ChatFrame {
        sender,
        content,
        raw,
    })
}

/// Body of an inline error frame
pub fn error_frame(reason: &str) -> String {
    json!({ "error": reason }).to_string()
}

#[track_caller]
fn required_text(raw: &Value, field: &str) -> WsErrorResult<String> {
    match raw.get(field).and_then(Value::as_str) {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(WsError::InvalidFrame {
            reason: INVALID_MESSAGE_FORMAT,
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
