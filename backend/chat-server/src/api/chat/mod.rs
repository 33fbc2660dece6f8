pub mod chat;
pub mod history_query;
pub mod message_dto;
pub mod send_message_request;
