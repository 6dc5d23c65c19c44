//! Mapping of non-2xx HTTP responses to [`WatsonError::Api`].

use crate::errors::error::WatsonError;
use bytes::Bytes;
use http::{HeaderMap, StatusCode};
use serde_json::Value;

/// Build a [`WatsonError::Api`] from a failed response.
///
/// The message is taken from the first of these body fields that holds a
/// string: `errors[0].message`, `error`, `message`, `errorMessage`,
/// `code_description`. Otherwise the status reason phrase is used.
pub fn api_error_from_response(status: u16, headers: HeaderMap, body: &Bytes) -> WatsonError {
    let body_str = String::from_utf8_lossy(body).into_owned();

    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|json| extract_message(&json))
        .unwrap_or_else(|| reason_phrase(status));

    WatsonError::Api {
        status,
        message,
        headers,
        body: body_str,
    }
}

fn extract_message(json: &Value) -> Option<String> {
    if let Some(message) = json
        .get("errors")
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("message"))
        .and_then(Value::as_str)
    {
        return Some(message.to_string());
    }

    ["error", "message", "errorMessage", "code_description"]
        .iter()
        .find_map(|key| json.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

fn reason_phrase(status: u16) -> String {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|s| s.canonical_reason())
        .unwrap_or("Unknown Error")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(r#"{"error":"Not found","code":404}"#, "Not found" ; "error key")]
    #[test_case(r#"{"message":"Bad input"}"#, "Bad input" ; "message key")]
    #[test_case(r#"{"errorMessage":"Invalid version"}"#, "Invalid version" ; "errorMessage key")]
    #[test_case(r#"{"errors":[{"code":"missing_field","message":"collection_ids missing"}]}"#, "collection_ids missing" ; "errors array")]
    #[test_case(r#"{"code":400,"code_description":"Bad Request"}"#, "Bad Request" ; "code description")]
    fn test_message_extraction(body: &str, expected: &str) {
        let error = api_error_from_response(400, HeaderMap::new(), &Bytes::from(body.to_string()));
        match error {
            WatsonError::Api { status, message, .. } => {
                assert_eq!(status, 400);
                assert_eq!(message, expected);
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_non_json_body_falls_back_to_reason() {
        let error = api_error_from_response(
            503,
            HeaderMap::new(),
            &Bytes::from_static(b"<html>gateway down</html>"),
        );
        match error {
            WatsonError::Api { message, body, .. } => {
                assert_eq!(message, "Service Unavailable");
                assert_eq!(body, "<html>gateway down</html>");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }

    #[test]
    fn test_headers_are_kept() {
        let mut headers = HeaderMap::new();
        headers.insert("x-global-transaction-id", "abc123".parse().unwrap());
        let error = api_error_from_response(500, headers, &Bytes::from_static(b"{}"));
        match error {
            WatsonError::Api { headers, message, .. } => {
                assert_eq!(headers.get("x-global-transaction-id").unwrap(), "abc123");
                assert_eq!(message, "Internal Server Error");
            }
            other => panic!("expected API error, got {:?}", other),
        }
    }
}
