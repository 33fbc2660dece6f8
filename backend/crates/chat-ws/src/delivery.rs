use chat_core::Message;

use std::sync::Arc;

/// A published message as seen by one subscription
#[derive(Debug, Clone)]
pub struct Delivery {
    /// Hub-wide publish sequence number (1-based, matches history position + 1)
    pub sequence: u64,
    pub message: Arc<Message>,
}
