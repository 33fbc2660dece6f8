use crate::{ApiError, SendMessageRequest};

fn request(sender: Option<&str>, content: Option<&str>) -> SendMessageRequest {
    SendMessageRequest {
        sender: sender.map(str::to_string),
        content: content.map(str::to_string),
    }
}

#[test]
fn given_both_fields_when_validated_then_returns_values() {
    let (sender, content) = request(Some("alice"), Some("hi")).validate().unwrap();

    assert_eq!(sender, "alice");
    assert_eq!(content, "hi");
}

#[test]
fn given_blank_sender_when_validated_then_sender_error_only() {
    let err = request(Some("  "), Some("hi")).validate().unwrap_err();

    match err {
        ApiError::Validation { errors, .. } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "sender");
        }
        _ => panic!("Expected Validation error"),
    }
}

#[test]
fn given_both_missing_when_validated_then_both_reported_in_order() {
    let err = request(None, None).validate().unwrap_err();

    match err {
        ApiError::Validation { errors, .. } => {
            let fields: Vec<_> = errors.iter().map(|error| error.field).collect();
            assert_eq!(fields, vec!["sender", "content"]);
        }
        _ => panic!("Expected Validation error"),
    }
}
