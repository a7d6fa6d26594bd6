// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP transport for the gym API.
//!
//! Handles:
//! - Resolving request paths against the configured API base
//! - Cookie storage, so the session cookie rides along on every request
//! - Running request interceptors (CSRF) before each send
//! - Mapping non-2xx responses to `ClientError::Status`
//!
//! Every call is a single round trip: no retries, no timeouts, no caching.

use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::middleware::{CsrfInterceptor, RequestInterceptor};
use reqwest::cookie::Jar;
use reqwest::{Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Shared API client. Clones share the connection pool and cookie jar.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    cookies: Arc<Jar>,
    interceptors: Arc<Vec<Arc<dyn RequestInterceptor>>>,
}

impl ApiClient {
    /// Create a client for the configured base URL with the CSRF interceptor installed.
    pub fn new(config: &Config) -> Result<Self> {
        let cookies = Arc::new(Jar::default());
        let http = reqwest::Client::builder()
            .cookie_provider(cookies.clone())
            .build()?;

        let csrf: Arc<dyn RequestInterceptor> = Arc::new(CsrfInterceptor::new(cookies.clone()));

        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            cookies,
            interceptors: Arc::new(vec![csrf]),
        })
    }

    /// Append an interceptor; it runs after the ones already installed.
    pub fn with_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        Arc::make_mut(&mut self.interceptors).push(Arc::new(interceptor));
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Cookie jar shared by every request made through this client.
    pub fn cookies(&self) -> &Arc<Jar> {
        &self.cookies
    }

    /// Resolve an API path. A leading `/` is relative to the base, not the host.
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidUrl(format!("{path}: {e}")))
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::GET, path, |req| req).await
    }

    /// GET a JSON resource with query-string parameters.
    pub async fn get_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.send(Method::GET, path, |req| req.query(query)).await
    }

    /// POST a JSON body.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::POST, path, |req| req.json(body)).await
    }

    /// POST without a body (actions such as logout or close).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::POST, path, |req| req).await
    }

    /// PUT a JSON body.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PUT, path, |req| req.json(body)).await
    }

    /// PATCH a JSON body.
    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(Method::PATCH, path, |req| req.json(body)).await
    }

    /// DELETE a resource.
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(Method::DELETE, path, |req| req).await
    }

    /// Build, intercept, send, and decode one request.
    async fn send<T, F>(&self, method: Method, path: &str, build: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: FnOnce(RequestBuilder) -> RequestBuilder,
    {
        let url = self.url(path)?;
        let mut request = build(self.http.request(method, url)).build()?;

        for interceptor in self.interceptors.iter() {
            interceptor.intercept(&mut request);
        }

        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!(method = %method, url = %url, "Sending API request");

        let response = self.http.execute(request).await.map_err(|e| {
            tracing::warn!(method = %method, url = %url, error = %e, "API request failed");
            ClientError::Transport(e)
        })?;

        tracing::debug!(
            method = %method,
            url = %url,
            status = response.status().as_u16(),
            "API response"
        );

        Self::check_response_json(response).await
    }

    /// Check response status and parse the JSON body.
    ///
    /// An empty body (204, or an empty 2xx) decodes as JSON `null`, so
    /// `()` and `Option<T>` targets work for bodiless responses.
    async fn check_response_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_slice(b"null")?);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }
}
