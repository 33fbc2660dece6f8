use chat_core::Message;

use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};

/// Creates a message from `sender` whose content is `message-{index}`
pub fn create_test_message(sender: &str, index: usize) -> Arc<Message> {
    let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let timestamp = base + Duration::milliseconds(index as i64);

    Arc::new(
        Message::with_timestamp(sender, format!("message-{}", index), timestamp)
            .expect("fixture message should be valid"),
    )
}

/// Contents of the given messages, in order
pub fn contents(messages: &[Arc<Message>]) -> Vec<String> {
    messages.iter().map(|m| m.content().to_string()).collect()
}
