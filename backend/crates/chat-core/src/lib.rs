pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::message::{CONTENT_BLANK_MESSAGE, Message, SENDER_BLANK_MESSAGE};
