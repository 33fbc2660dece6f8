use crate::{ApiError, FieldError};

use chat_core::Message;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_binding_failed_with_field_details() {
    let error = ApiError::validation(vec![
        FieldError {
            field: "sender",
            message: "Sender cannot be blank".into(),
        },
        FieldError {
            field: "content",
            message: "Content cannot be blank".into(),
        },
    ]);

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["status"], 400);
    assert_eq!(json["message"], "Request binding failed");
    assert_eq!(
        json["details"],
        "sender: Sender cannot be blank; content: Content cannot be blank; "
    );
}

#[tokio::test]
async fn given_binding_error_when_rendered_then_400_request_binding_failed() {
    let (status, json) = body_json(ApiError::binding("expected value at line 1")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Request binding failed");
    assert_eq!(json["details"], "expected value at line 1");
}

#[tokio::test]
async fn given_internal_error_when_rendered_then_500_generic_message() {
    let (status, json) = body_json(ApiError::internal("store unavailable")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], 500);
    assert_eq!(json["message"], "An unexpected error occurred");
    assert_eq!(json["details"], "store unavailable");
}

#[test]
fn given_core_validation_error_when_converted_then_single_field_error() {
    let core_error = Message::new("alice", " ").unwrap_err();
    let api_error: ApiError = core_error.into();

    match api_error {
        ApiError::Validation { errors, .. } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "content");
            assert_eq!(errors[0].message, "Content cannot be blank");
        }
        _ => panic!("Expected Validation error"),
    }
}
