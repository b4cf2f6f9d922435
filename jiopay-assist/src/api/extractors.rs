use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;

use crate::error::AssistError;

/// JSON body extractor whose rejections become [`AssistError::Validation`].
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AssistError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AssistError {
    fn from(rejection: JsonRejection) -> Self {
        map_json_rejection(rejection)
    }
}

fn map_json_rejection(rejection: JsonRejection) -> AssistError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            let message = err.body_text();
            if let Some(field) = extract_missing_field(&message) {
                AssistError::Validation(format!("Missing required field: {field}"))
            } else {
                AssistError::Validation(format!("Invalid JSON: {message}"))
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            AssistError::Validation(format!("JSON syntax error: {}", err.body_text()))
        }
        JsonRejection::MissingJsonContentType(_) => {
            AssistError::Validation("Missing `Content-Type: application/json` header".to_string())
        }
        JsonRejection::BytesRejection(_) => {
            AssistError::Internal("Failed to read request body".to_string())
        }
        _ => AssistError::Validation(rejection.body_text()),
    }
}

fn extract_missing_field(message: &str) -> Option<&str> {
    let prefix = "missing field `";
    let start = message.find(prefix)? + prefix.len();
    let remaining = message.get(start..)?;
    let end = remaining.find('`')?;
    remaining.get(..end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_missing_field_name() {
        let msg = "Failed to deserialize the JSON body into the target type: missing field `query` at line 1 column 2";
        assert_eq!(extract_missing_field(msg), Some("query"));
    }

    #[test]
    fn no_field_in_other_messages() {
        assert_eq!(extract_missing_field("expected value at line 1"), None);
    }
}
