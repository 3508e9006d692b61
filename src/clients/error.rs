//! Error types for calls to the scoring service.

use reqwest::Method;
use thiserror::Error;

/// Why a single call to the scoring service did not produce a payload.
///
/// Every variant names the request that failed so a log line is enough to
/// find the offending call.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RemoteFailure {
    /// The request never produced an HTTP response (connect, DNS, timeout, body read).
    #[error("{method} {path} => transport error: {message}")]
    Transport {
        method: Method,
        path: String,
        message: String,
    },

    /// The service answered with a status other than 200, 201 or 204.
    #[error("{method} {path} => {status}{}", display_message(.message))]
    Status {
        method: Method,
        path: String,
        status: u16,
        message: Option<String>,
    },

    /// The service answered successfully but the body could not be decoded.
    #[error("{method} {path} => decode error: {message}")]
    Decode {
        method: Method,
        path: String,
        message: String,
    },
}

impl RemoteFailure {
    /// HTTP status of the response, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteFailure::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn display_message(message: &Option<String>) -> String {
    match message {
        Some(message) => format!(" {message}"),
        None => String::new(),
    }
}

/// Pulls the `"message"` field out of a JSON error body.
///
/// Bodies that are empty, not JSON, or lack a string `message` yield `None`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("message")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_with_message() {
        let failure = RemoteFailure::Status {
            method: Method::PUT,
            path: "/contender/4".to_string(),
            status: 409,
            message: Some("Contest has ended".to_string()),
        };
        assert_eq!(failure.to_string(), "PUT /contender/4 => 409 Contest has ended");
        assert_eq!(failure.status(), Some(409));
    }

    #[test]
    fn test_status_display_without_message() {
        let failure = RemoteFailure::Status {
            method: Method::GET,
            path: "/tick".to_string(),
            status: 500,
            message: None,
        };
        assert_eq!(failure.to_string(), "GET /tick => 500");
    }

    #[test]
    fn test_transport_has_no_status() {
        let failure = RemoteFailure::Transport {
            method: Method::GET,
            path: "/problem".to_string(),
            message: "connection refused".to_string(),
        };
        assert_eq!(failure.status(), None);
        assert_eq!(
            failure.to_string(),
            "GET /problem => transport error: connection refused"
        );
    }

    #[test]
    fn test_extract_error_message() {
        assert_eq!(
            extract_error_message(r#"{"message":"Invalid registration code"}"#),
            Some("Invalid registration code".to_string())
        );
        assert_eq!(extract_error_message(r#"{"error":"nope"}"#), None);
        assert_eq!(extract_error_message(r#"{"message":42}"#), None);
        assert_eq!(extract_error_message("<html>Bad Gateway</html>"), None);
        assert_eq!(extract_error_message(""), None);
    }
}
