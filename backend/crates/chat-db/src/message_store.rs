use chat_core::Message;

use std::sync::Arc;

use log::trace;
use parking_lot::RwLock;

/// Append-only, in-memory history of every published message.
///
/// Entries are never evicted or rewritten, so positions stay stable for the
/// life of the process. Reads return a snapshot of `Arc` handles; the read
/// lock is held only while the handles are cloned.
pub struct MessageStore {
    messages: Arc<RwLock<Vec<Arc<Message>>>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Append a message, returning its zero-based position
    pub fn append(&self, message: Arc<Message>) -> usize {
        let mut messages = self.messages.write();
        messages.push(message);
        let position = messages.len() - 1;

        trace!("Message stored at position {}", position);

        position
    }

    /// Snapshot of the full history in publish order
    pub fn find_all(&self) -> Vec<Arc<Message>> {
        self.messages.read().clone()
    }

    /// The `limit` most recent messages, oldest first
    pub fn find_last(&self, limit: usize) -> Vec<Arc<Message>> {
        let messages = self.messages.read();
        let start = messages.len().saturating_sub(limit);
        messages[start..].to_vec()
    }

    pub fn len(&self) -> usize {
        self.messages.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.read().is_empty()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MessageStore {
    fn clone(&self) -> Self {
        Self {
            messages: Arc::clone(&self.messages),
        }
    }
}
