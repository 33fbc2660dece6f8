use crate::{CoreError, Message, SENDER_BLANK_MESSAGE};

use chrono::{TimeZone, Utc};

#[test]
fn test_message_new() {
    let message = Message::new("alice", "hello").unwrap();

    assert_eq!(message.sender(), "alice");
    assert_eq!(message.content(), "hello");
    assert!(message.timestamp() <= Utc::now());
}

#[test]
fn test_message_blank_sender_rejected() {
    let result = Message::new("   ", "hello");

    let err = result.unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }));
    assert_eq!(err.field(), "sender");
    assert_eq!(err.message(), SENDER_BLANK_MESSAGE);
}

#[test]
fn test_message_empty_content_rejected() {
    let err = Message::new("alice", "").unwrap_err();

    assert_eq!(err.field(), "content");
}

#[test]
fn test_message_keeps_given_timestamp() {
    let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
    let message = Message::with_timestamp("bob", "hi there", timestamp).unwrap();

    assert_eq!(message.sender(), "bob");
    assert_eq!(message.content(), "hi there");
    assert_eq!(message.timestamp(), timestamp);
}
