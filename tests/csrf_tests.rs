// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! CSRF header and cookie-credential tests against a mock API.
//!
//! These tests verify that:
//! 1. Cookies set by the API are sent back on later requests
//! 2. Unsafe verbs echo the `csrftoken` cookie as `X-CSRFToken`
//! 3. Safe verbs never carry the header
//! 4. Requests still go out when the cookie is missing

use gym_tracker_client::models::{GymSessionUpdate, NewGymSession, NewUserLocation};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

mod common;

fn csrf_header(request: &Request) -> Option<String> {
    request
        .headers
        .get("x-csrftoken")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

fn session_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "start_time": "2025-03-01T10:00:00Z",
        "end_time": null,
        "is_open": true,
        "location": null,
        "note": "",
        "exercise_completions": [],
        "created_at": "2025-03-01T10:00:00Z",
        "updated_at": "2025-03-01T10:00:00Z"
    })
}

fn location_json(id: u64) -> serde_json::Value {
    json!({
        "id": id,
        "name": "Garage",
        "address": "",
        "latitude": null,
        "longitude": null,
        "created_at": "2025-03-01T10:00:00Z",
        "updated_at": "2025-03-01T10:00:00Z"
    })
}

async fn mount_login_setting_cookies(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(common::user_json(1, "a@b.com", "Ada"))
                .append_header("set-cookie", "sessionid=sess-1; Path=/; HttpOnly")
                .append_header("set-cookie", "csrftoken=tok123; Path=/"),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::user_json(1, "a@b.com", "Ada")),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_server_cookies_sent_with_later_requests() {
    let server = MockServer::start().await;
    let ctx = common::test_context(&server);
    mount_login_setting_cookies(&server).await;

    ctx.auth.login("a@b.com", "pw").await.expect("login should succeed");

    let me_requests = common::requests_to(&server, "GET", "/api/auth/me/").await;
    assert_eq!(me_requests.len(), 1);
    let cookie = me_requests[0]
        .headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .expect("cookie header sent");
    assert!(cookie.contains("sessionid=sess-1"), "cookie header: {cookie}");
    assert!(csrf_header(&me_requests[0]).is_none());
}

#[tokio::test]
async fn test_unsafe_verbs_carry_token_safe_verbs_do_not() {
    let server = MockServer::start().await;
    let ctx = common::test_context(&server);
    mount_login_setting_cookies(&server).await;

    Mock::given(method("GET"))
        .and(path("/api/sessions/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([session_json(5)])))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/sessions/"))
        .respond_with(ResponseTemplate::new(201).set_body_json(session_json(5)))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/sessions/5/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(session_json(5)))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/locations/2/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(location_json(2)))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/sessions/5/"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    ctx.auth.login("a@b.com", "pw").await.expect("login should succeed");

    ctx.sessions.list().await.expect("list");
    ctx.sessions
        .create(&NewGymSession::default())
        .await
        .expect("create");
    ctx.sessions
        .update(
            5,
            &GymSessionUpdate {
                note: Some("felt strong".to_string()),
                location_id: None,
            },
        )
        .await
        .expect("update");
    ctx.locations
        .update(
            2,
            &NewUserLocation {
                name: "Garage".to_string(),
                ..Default::default()
            },
        )
        .await
        .expect("put");
    ctx.sessions.delete(5).await.expect("delete");

    let requests = server.received_requests().await.expect("recording enabled");
    let login_index = requests
        .iter()
        .position(|r| r.url.path() == "/api/auth/login/")
        .expect("login request");

    // The login request itself went out before the cookie existed.
    assert!(csrf_header(&requests[login_index]).is_none());

    for request in &requests[login_index + 1..] {
        let header = csrf_header(request);
        match request.method.as_str() {
            "POST" | "PUT" | "PATCH" | "DELETE" => assert_eq!(
                header.as_deref(),
                Some("tok123"),
                "{} {} missing token",
                request.method,
                request.url.path()
            ),
            _ => assert!(
                header.is_none(),
                "{} {} should not carry a token",
                request.method,
                request.url.path()
            ),
        }
    }
}

#[tokio::test]
async fn test_missing_cookie_still_sends_request() {
    let server = MockServer::start().await;
    let ctx = common::test_context(&server);

    Mock::given(method("POST"))
        .and(path("/api/sessions/"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_json(json!({ "detail": "CSRF Failed: CSRF token missing." })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = ctx
        .sessions
        .create(&NewGymSession::default())
        .await
        .expect_err("server rejects");
    assert!(err.is_auth_error());

    let posts = common::requests_to(&server, "POST", "/api/sessions/").await;
    assert_eq!(posts.len(), 1);
    assert!(csrf_header(&posts[0]).is_none());
}

#[tokio::test]
async fn test_seeded_cookie_used_for_logout() {
    let server = MockServer::start().await;
    let ctx = common::test_context(&server);
    common::seed_cookie(&ctx, "csrftoken=seeded; Path=/");

    Mock::given(method("POST"))
        .and(path("/api/auth/logout/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "detail": "Logged out." })))
        .mount(&server)
        .await;

    ctx.auth.logout().await.expect("logout should succeed");

    let posts = common::requests_to(&server, "POST", "/api/auth/logout/").await;
    assert_eq!(csrf_header(&posts[0]).as_deref(), Some("seeded"));
}
