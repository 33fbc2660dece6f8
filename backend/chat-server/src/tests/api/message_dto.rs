use crate::MessageDto;

use chat_core::Message;

use chrono::{TimeZone, Utc};

#[test]
fn given_message_when_serialized_as_dto_then_rfc3339_timestamp() {
    let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let message = Message::with_timestamp("bob", "hi there", timestamp).unwrap();

    let json = serde_json::to_value(MessageDto::from(&message)).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "sender": "bob",
            "content": "hi there",
            "timestamp": "2024-05-01T12:30:00Z",
        })
    );
}
