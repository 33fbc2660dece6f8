use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WsError {
    #[error("Connection closed: {reason} {location}")]
    ConnectionClosed {
        reason: String,
        location: ErrorLocation,
    },

    #[error("Send buffer full, client too slow {location}")]
    SendBufferFull { location: ErrorLocation },

    #[error("Invalid frame: {reason} {location}")]
    InvalidFrame {
        reason: &'static str,
        location: ErrorLocation,
    },

    #[error("JSON serialization failed: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl WsError {
    /// Text sent back to the client in an inline `{"error": ...}` frame
    pub fn client_reason(&self) -> &'static str {
        match self {
            Self::InvalidFrame { reason, .. } => reason,
            Self::Serialization { .. } => crate::SERIALIZATION_FAILED,
            Self::ConnectionClosed { .. } | Self::SendBufferFull { .. } => "Internal error",
        }
    }
}

impl From<serde_json::Error> for WsError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WsError>;
