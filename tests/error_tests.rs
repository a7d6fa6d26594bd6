// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use gym_tracker_client::config::{Config, ConfigError};
use gym_tracker_client::error::ClientError;
use reqwest::StatusCode;

fn status_error(status: StatusCode, body: &str) -> ClientError {
    ClientError::Status {
        status,
        body: body.to_string(),
    }
}

#[test]
fn test_status_error_display_includes_body() {
    let err = status_error(StatusCode::BAD_REQUEST, r#"{"email":["Enter a valid email."]}"#);
    assert_eq!(
        err.to_string(),
        r#"HTTP 400 Bad Request: {"email":["Enter a valid email."]}"#
    );
    // Field errors are not a single detail message.
    assert_eq!(err.detail(), None);
}

#[test]
fn test_not_found_is_not_auth_error() {
    let err = status_error(StatusCode::NOT_FOUND, r#"{"detail":"Not found."}"#);
    assert!(err.is_not_found());
    assert!(!err.is_auth_error());
    assert_eq!(err.detail().as_deref(), Some("Not found."));
}

#[test]
fn test_csrf_rejection_is_auth_error() {
    let err = status_error(
        StatusCode::FORBIDDEN,
        r#"{"detail":"CSRF Failed: CSRF token missing."}"#,
    );
    assert!(err.is_auth_error());
    assert!(err.detail().unwrap().starts_with("CSRF Failed"));
}

#[test]
fn test_decimal_error_names_field() {
    let err = ClientError::InvalidDecimal {
        field: "distance",
        value: "far".to_string(),
    };
    assert_eq!(err.to_string(), r#"Invalid decimal in distance: "far""#);
    assert_eq!(err.status(), None);
}

#[test]
fn test_config_error_converts() {
    let err: ClientError = Config::with_base_url("not a url").unwrap_err().into();
    assert!(matches!(
        err,
        ClientError::Config(ConfigError::InvalidBaseUrl(_))
    ));
    assert!(err.to_string().starts_with("Configuration error:"));
}
