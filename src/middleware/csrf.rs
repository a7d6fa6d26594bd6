// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSRF token injection for state-changing requests.
//!
//! The backend uses cookie sessions and expects the `csrftoken` cookie to be
//! echoed back in the `X-CSRFToken` header on every unsafe request. Safe
//! reads are left untouched. A missing cookie is not an error here: the
//! request goes out without the header and the server decides.

use super::RequestInterceptor;
use reqwest::cookie::CookieStore;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Method, Url};
use std::sync::Arc;

/// Cookie the server stores the CSRF token in.
pub const CSRF_COOKIE_NAME: &str = "csrftoken";

/// Header the token is echoed in (wire form, header names are case-insensitive).
pub const CSRF_HEADER_NAME: &str = "X-CSRFToken";

static CSRF_HEADER: HeaderName = HeaderName::from_static("x-csrftoken");

/// Whether requests with this method must carry the CSRF header.
pub fn requires_csrf(method: &Method) -> bool {
    [Method::POST, Method::PUT, Method::PATCH, Method::DELETE].contains(method)
}

/// Find a cookie value in a `Cookie` header string (`a=1; b=2`).
///
/// Values are percent-decoded; empty values count as absent.
pub fn cookie_value(cookie_header: &str, name: &str) -> Option<String> {
    cookie_header
        .split(';')
        .map(str::trim)
        .find_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            if key.trim() != name {
                return None;
            }
            let decoded = urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string());
            Some(decoded)
        })
        .filter(|value| !value.is_empty())
}

/// Copies the `csrftoken` cookie into `X-CSRFToken` on unsafe requests.
#[derive(Clone)]
pub struct CsrfInterceptor {
    cookies: Arc<dyn CookieStore>,
}

impl CsrfInterceptor {
    /// Create an interceptor reading from the client's cookie store.
    pub fn new(cookies: Arc<dyn CookieStore>) -> Self {
        Self { cookies }
    }

    /// Current token for `url`, read fresh from the store.
    pub fn token_for(&self, url: &Url) -> Option<String> {
        let header = self.cookies.cookies(url)?;
        let header = header.to_str().ok()?;
        cookie_value(header, CSRF_COOKIE_NAME)
    }
}

impl RequestInterceptor for CsrfInterceptor {
    fn intercept(&self, request: &mut reqwest::Request) {
        if !requires_csrf(request.method()) {
            return;
        }

        let Some(token) = self.token_for(request.url()) else {
            tracing::debug!(
                method = %request.method(),
                url = %request.url(),
                "No CSRF cookie, sending without token"
            );
            return;
        };

        match HeaderValue::from_str(&token) {
            Ok(value) => {
                request.headers_mut().insert(CSRF_HEADER.clone(), value);
            }
            Err(_) => {
                tracing::warn!(url = %request.url(), "CSRF cookie is not a valid header value");
            }
        }
    }
}
