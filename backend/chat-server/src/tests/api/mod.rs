mod error;
mod history_query;
mod message_dto;
mod send_message_request;
