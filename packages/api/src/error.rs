//! Failures talking to the library service.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never got a response (DNS, refused connection, CORS, ...).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("{}", status_text(.status, .message))]
    Status { status: u16, message: Option<String> },

    /// A 2xx body that does not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

fn status_text(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("request failed with status {status}"),
    }
}

impl ApiError {
    /// Build a status error, pulling a human-readable message out of the body:
    /// a JSON `message` (or `error`) field first, then plain text.
    pub(crate) fn from_response(status: StatusCode, body: &str) -> Self {
        Self::Status {
            status: status.as_u16(),
            message: extract_message(body),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// The message the server put in an error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }
}

fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Object(map)) => ["message", "error"]
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()))
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string),
        Ok(serde_json::Value::String(text)) if !text.trim().is_empty() => Some(text),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_message_is_preferred() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Email already registered","error":"Bad Request"}"#,
        );
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.server_message(), Some("Email already registered"));
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[test]
    fn test_plain_text_body_is_the_message() {
        let err = ApiError::from_response(StatusCode::UNAUTHORIZED, "Invalid credentials\n");
        assert_eq!(err.server_message(), Some("Invalid credentials"));
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_empty_body_falls_back_to_status() {
        let err = ApiError::from_response(StatusCode::INTERNAL_SERVER_ERROR, "  ");
        assert_eq!(err.server_message(), None);
        assert_eq!(err.to_string(), "request failed with status 500");
    }

    #[test]
    fn test_json_without_message_has_none() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"status":404}"#);
        assert_eq!(err.server_message(), None);
    }
}
