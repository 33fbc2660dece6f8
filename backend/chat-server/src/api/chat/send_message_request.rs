use crate::api::error::{ApiError, FieldError, Result as ApiResult};

use chat_core::{CONTENT_BLANK_MESSAGE, SENDER_BLANK_MESSAGE};

use serde::Deserialize;

/// Body of `POST /chat/send`
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub sender: Option<String>,

    #[serde(default)]
    pub content: Option<String>,
}

impl SendMessageRequest {
    /// Check both fields, reporting every blank one, and return `(sender, content)`
    #[track_caller]
    pub fn validate(self) -> ApiResult<(String, String)> {
        let mut errors = Vec::new();

        let sender = non_blank(self.sender);
        if sender.is_none() {
            errors.push(FieldError {
                field: "sender",
                message: SENDER_BLANK_MESSAGE.to_string(),
            });
        }

        let content = non_blank(self.content);
        if content.is_none() {
            errors.push(FieldError {
                field: "content",
                message: CONTENT_BLANK_MESSAGE.to_string(),
            });
        }

        match (sender, content) {
            (Some(sender), Some(content)) => Ok((sender, content)),
            _ => Err(ApiError::validation(errors)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
