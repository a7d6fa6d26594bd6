// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use gym_tracker_client::config::Config;
use gym_tracker_client::AppContext;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Create a context whose API base is `/api/` on the mock server.
#[allow(dead_code)]
pub fn test_context(server: &MockServer) -> AppContext {
    let config = Config::with_base_url(&format!("{}/api/", server.uri()))
        .expect("mock server URL is valid");
    AppContext::new(config).expect("Failed to build client context")
}

/// Context pointed at a port nothing listens on.
#[allow(dead_code)]
pub fn unreachable_context() -> AppContext {
    let config = Config::with_base_url("http://127.0.0.1:9/api/").expect("valid url");
    AppContext::new(config).expect("Failed to build client context")
}

/// Body of `/auth/me/` for a test user.
#[allow(dead_code)]
pub fn user_json(id: u64, email: &str, first_name: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "first_name": first_name,
        "last_name": "Tester"
    })
}

/// Put a cookie in the context's jar as if the API had set it.
#[allow(dead_code)]
pub fn seed_cookie(ctx: &AppContext, cookie: &str) {
    ctx.api.cookies().add_cookie_str(cookie, ctx.api.base_url());
}

/// Mount `GET /api/auth/me/` returning `user` and log the context in.
#[allow(dead_code)]
pub async fn authenticate(server: &MockServer, ctx: &AppContext, user: Value) {
    Mock::given(method("GET"))
        .and(path("/api/auth/me/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user))
        .up_to_n_times(1)
        .mount(server)
        .await;

    let outcome = ctx.auth.fetch_current_user().await;
    assert!(outcome.is_authenticated(), "setup fetch failed: {outcome:?}");
}

/// Requests the mock server saw for `method` + `path`.
#[allow(dead_code)]
pub async fn requests_to(server: &MockServer, method: &str, path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == method && r.url.path() == path)
        .collect()
}
