use reqwest::StatusCode;
use serde_json::json;

use crate::client::{error_from_response, first_error_message};
use crate::error::{AllocationError, ErrorContext};

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found",
    ));

    let mapped = result.context("Failed to read config file");
    assert!(mapped.is_err());

    match mapped {
        Err(AllocationError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read config file"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected AllocationError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Access token not found");

    assert!(result.is_err());
    match result {
        Err(AllocationError::Unknown(msg)) => {
            assert_eq!(msg, "Access token not found");
        }
        _ => panic!("Expected AllocationError::Unknown"),
    }
}

#[test]
fn test_top_level_error_string() {
    let body = json!({"error": "Only team leader can remove members"}).to_string();
    match error_from_response(StatusCode::FORBIDDEN, &body) {
        AllocationError::Api(msg) => assert_eq!(msg, "Only team leader can remove members"),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[test]
fn test_field_validation_array() {
    let body = json!({"name": ["A team with this name already exists"]}).to_string();
    match error_from_response(StatusCode::BAD_REQUEST, &body) {
        AllocationError::Validation { field, message } => {
            assert_eq!(field, "name");
            assert_eq!(message, "A team with this name already exists");
        }
        other => panic!("Expected Validation error, got {:?}", other),
    }
}

#[test]
fn test_bare_array_of_messages() {
    let body = json!(["You are already a team leader"]).to_string();
    match error_from_response(StatusCode::BAD_REQUEST, &body) {
        AllocationError::Api(msg) => assert_eq!(msg, "You are already a team leader"),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[test]
fn test_non_field_errors_are_not_field_specific() {
    let body = json!({"non_field_errors": ["Invalid credentials"]}).to_string();
    match error_from_response(StatusCode::BAD_REQUEST, &body) {
        AllocationError::Api(msg) => assert_eq!(msg, "Invalid credentials"),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[test]
fn test_not_found_with_detail_body() {
    let body = json!({"detail": "Not found."}).to_string();
    match error_from_response(StatusCode::NOT_FOUND, &body) {
        AllocationError::NotFound(msg) => assert_eq!(msg, "Not found."),
        other => panic!("Expected NotFound error, got {:?}", other),
    }
}

#[test]
fn test_not_found_without_body() {
    match error_from_response(StatusCode::NOT_FOUND, "") {
        AllocationError::NotFound(_) => {}
        other => panic!("Expected NotFound error, got {:?}", other),
    }
}

#[test]
fn test_unparseable_body_falls_back_to_status() {
    let error = error_from_response(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
    match error {
        AllocationError::Api(msg) => assert!(msg.contains("500")),
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[test]
fn test_first_error_message_prefers_error_key() {
    let value = json!({"error": "top-level", "name": ["field-level"]});
    let (field, message) = first_error_message(&value).expect("message expected");
    assert!(field.is_none());
    assert_eq!(message, "top-level");
}

#[test]
fn test_inline_message_strips_variant_prefix() {
    let err = AllocationError::Validation {
        field: "user_id".to_string(),
        message: "User not found".to_string(),
    };
    assert_eq!(err.inline_message(), "User not found");

    let err = AllocationError::Api("Team is already full".to_string());
    assert_eq!(err.inline_message(), "Team is already full");
}
