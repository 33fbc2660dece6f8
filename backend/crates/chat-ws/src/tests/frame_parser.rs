use crate::{INVALID_JSON_FORMAT, INVALID_MESSAGE_FORMAT, WsError, error_frame, parse_chat_frame};

use serde_json::json;

#[test]
fn given_valid_frame_when_parsed_then_fields_extracted() {
    let frame = parse_chat_frame(r#"{"sender":"alice","content":"hi"}"#).unwrap();

    assert_eq!(frame.sender, "alice");
    assert_eq!(frame.content, "hi");
}

#[test]
fn given_frame_with_extra_fields_when_echoed_then_extra_fields_kept() {
    let frame =
        parse_chat_frame(r#"{"sender":"alice","content":"hi","clientId":7}"#).unwrap();

    let echo: serde_json::Value = serde_json::from_str(&frame.echo().unwrap()).unwrap();

    assert_eq!(echo, json!({"sender": "alice", "content": "hi", "clientId": 7}));
}

#[test]
fn given_not_json_when_parsed_then_invalid_json_format() {
    let err = parse_chat_frame("not-json").unwrap_err();

    assert!(matches!(err, WsError::InvalidFrame { .. }));
    assert_eq!(err.client_reason(), INVALID_JSON_FORMAT);
}

#[test]
fn given_missing_content_when_parsed_then_invalid_message_format() {
    let err = parse_chat_frame(r#"{"sender":"alice"}"#).unwrap_err();

    assert_eq!(err.client_reason(), INVALID_MESSAGE_FORMAT);
}

#[test]
fn given_blank_sender_when_parsed_then_invalid_message_format() {
    let err = parse_chat_frame(r#"{"sender":"   ","content":"hi"}"#).unwrap_err();

    assert_eq!(err.client_reason(), INVALID_MESSAGE_FORMAT);
}

#[test]
fn given_non_string_field_when_parsed_then_invalid_message_format() {
    let err = parse_chat_frame(r#"{"sender":42,"content":"hi"}"#).unwrap_err();

    assert_eq!(err.client_reason(), INVALID_MESSAGE_FORMAT);
}

#[test]
fn given_json_array_when_parsed_then_invalid_message_format() {
    let err = parse_chat_frame(r#"["alice","hi"]"#).unwrap_err();

    assert_eq!(err.client_reason(), INVALID_MESSAGE_FORMAT);
}

#[test]
fn given_reason_when_error_frame_built_then_single_error_field() {
    assert_eq!(
        error_frame(INVALID_JSON_FORMAT),
        r#"{"error":"Invalid JSON format"}"#
    );
}
