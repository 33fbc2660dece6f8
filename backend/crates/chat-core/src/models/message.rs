use crate::{CoreError, Result};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;

pub const SENDER_BLANK_MESSAGE: &str = "Sender cannot be blank";
pub const CONTENT_BLANK_MESSAGE: &str = "Content cannot be blank";

/// A chat message as accepted by the publishing boundary.
///
/// Fields are private so a constructed message can't change after it has been
/// handed to the hub; both text fields are guaranteed non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    sender: String,
    content: String,
    timestamp: DateTime<Utc>,
}

impl Message {
    /// Build a message stamped with the current time
    #[track_caller]
    pub fn new(sender: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        Self::with_timestamp(sender, content, Utc::now())
    }

    #[track_caller]
    pub fn with_timestamp(
        sender: impl Into<String>,
        content: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self> {
        let sender = sender.into();
        let content = content.into();

        require_non_blank("sender", &sender, SENDER_BLANK_MESSAGE)?;
        require_non_blank("content", &content, CONTENT_BLANK_MESSAGE)?;

        Ok(Self {
            sender,
            content,
            timestamp,
        })
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[track_caller]
fn require_non_blank(field: &'static str, value: &str, message: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            field,
            message: message.to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }
    Ok(())
}
