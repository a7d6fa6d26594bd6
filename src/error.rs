// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client error types with consistent accessors for callers.

use crate::config::ConfigError;
use reqwest::StatusCode;

/// Error returned by every fallible client operation.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid decimal in {field}: {value:?}")]
    InvalidDecimal { field: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// HTTP status carried by the error, when the server answered.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(err) => err.status(),
            _ => None,
        }
    }

    /// 401 or 403: no session on identity reads, rejected credentials on
    /// login/signup.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Server-provided `detail` message, e.g. "Invalid credentials.".
    pub fn detail(&self) -> Option<String> {
        match self {
            ClientError::Status { body, .. } => {
                let value: serde_json::Value = serde_json::from_str(body).ok()?;
                value.get("detail")?.as_str().map(str::to_string)
            }
            _ => None,
        }
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: StatusCode, body: &str) -> ClientError {
        ClientError::Status {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_auth_error_statuses() {
        assert!(status_error(StatusCode::UNAUTHORIZED, "").is_auth_error());
        assert!(status_error(StatusCode::FORBIDDEN, "").is_auth_error());
        assert!(!status_error(StatusCode::BAD_REQUEST, "").is_auth_error());
        assert!(!ClientError::InvalidUrl("x".to_string()).is_auth_error());
    }

    #[test]
    fn test_detail_extraction() {
        let err = status_error(StatusCode::BAD_REQUEST, r#"{"detail":"Invalid credentials."}"#);
        assert_eq!(err.detail().as_deref(), Some("Invalid credentials."));

        let err = status_error(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_detail_ignores_non_object_bodies() {
        // DRF non-field validation errors come back as a bare list.
        let err = status_error(StatusCode::BAD_REQUEST, r#"["Default tags cannot be edited."]"#);
        assert_eq!(err.detail(), None);

        let err = status_error(StatusCode::BAD_REQUEST, r#"["first", "second"]"#);
        assert_eq!(err.detail(), None);

        let err = status_error(StatusCode::BAD_REQUEST, r#"{"detail":["not a string"]}"#);
        assert_eq!(err.detail(), None);
    }

    #[test]
    fn test_display_includes_status_and_body() {
        let err = status_error(StatusCode::NOT_FOUND, r#"{"detail":"No open session."}"#);
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("No open session."));
        assert!(err.is_not_found());
    }
}
