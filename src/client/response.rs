use reqwest::StatusCode;
use serde_json::Value;

use crate::error::AllocationError;

/// Map a non-2xx response to the error taxonomy.
///
/// The API reports failures as `{"error": "..."}`, `{"detail": "..."}`,
/// a bare array of messages, or field-named arrays of validation messages
/// (`{"name": [...]}`); the first available message wins.
pub fn error_from_response(status: StatusCode, body: &str) -> AllocationError {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some((field, message)) = first_error_message(&value) {
            if status == StatusCode::NOT_FOUND {
                return AllocationError::NotFound(message);
            }
            return match field {
                Some(field) => AllocationError::Validation { field, message },
                None => AllocationError::Api(message),
            };
        }
    }

    if status == StatusCode::NOT_FOUND {
        return AllocationError::NotFound("not found".to_string());
    }

    AllocationError::Api(format!("HTTP error: {}", status))
}

/// Extract the first error message from a decoded error body, along with the
/// field it belongs to when it came from a field-named validation array.
pub fn first_error_message(value: &Value) -> Option<(Option<String>, String)> {
    // Bare array of messages, e.g. ["You are already a team leader"]
    if let Some(list) = value.as_array() {
        let message = list.first().and_then(Value::as_str)?;
        return Some((None, message.to_string()));
    }

    let object = value.as_object()?;

    for key in ["error", "detail"] {
        if let Some(message) = object.get(key).and_then(Value::as_str) {
            return Some((None, message.to_string()));
        }
    }

    for (field, entry) in object {
        if let Some(message) = entry.as_array().and_then(|l| l.first()).and_then(Value::as_str) {
            let field = if field == "non_field_errors" {
                None
            } else {
                Some(field.clone())
            };
            return Some((field, message.to_string()));
        }
    }

    None
}
