// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Outgoing request middleware (CSRF token injection).

pub mod csrf;

pub use csrf::CsrfInterceptor;

/// Hook run on every outgoing request after it is built and before it is sent.
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: &mut reqwest::Request);
}
