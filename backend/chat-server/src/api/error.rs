//! REST API error types
//!
//! Every failure is rendered as `{status, message, details}` with the
//! matching HTTP status code.

use chat_core::CoreError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const REQUEST_BINDING_FAILED_MESSAGE: &str = "Request binding failed";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: u16,
    pub message: String,
    pub details: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: &str, details: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.to_string(),
            details: details.into(),
        }
    }
}

/// One rejected request field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// API errors with associated HTTP status codes.
///
/// Field validation and unbindable input share the `Request binding failed`
/// body; they differ only in how `details` is built.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Field validation failed (400)
    #[error("Validation failed: {details} {location}", details = render_fields(.errors))]
    Validation {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// Body or query could not be bound (400)
    #[error("Request binding failed: {details} {location}")]
    Binding {
        details: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn binding(details: impl Into<String>) -> Self {
        Self::Binding {
            details: details.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Binding { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation { ref errors, .. } => {
                log::warn!("{}", self);
                ErrorResponse::new(status, REQUEST_BINDING_FAILED_MESSAGE, render_fields(errors))
            }
            ApiError::Binding { ref details, .. } => {
                log::warn!("{}", self);
                ErrorResponse::new(status, REQUEST_BINDING_FAILED_MESSAGE, details.as_str())
            }
            ApiError::Internal { ref message, .. } => {
                log::error!("{}", self);
                ErrorResponse::new(status, UNEXPECTED_ERROR_MESSAGE, message.as_str())
            }
        };

        (status, Json(body)).into_response()
    }
}

/// `field: message; ` for every rejected field, in order
fn render_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|error| format!("{}: {}; ", error.field, error.message))
        .collect()
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::validation(vec![FieldError {
            field: e.field(),
            message: e.message().to_string(),
        }])
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::binding(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::binding(rejection.body_text())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
