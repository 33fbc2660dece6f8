pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    chat::{
        chat::{HEALTH_TEXT, chat_health, message_history, send_message, stream_messages},
        history_query::HistoryQuery,
        message_dto::MessageDto,
        send_message_request::SendMessageRequest,
    },
    error::ApiError,
    error::ErrorResponse,
    error::FieldError,
    error::Result as ApiResult,
};

pub use crate::routes::{build_router, metrics_router};
