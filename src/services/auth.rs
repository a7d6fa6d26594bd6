// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authentication session store.
//!
//! Holds the current user (or none) and whether an auth action is in flight.
//! State only changes through the operations below:
//!
//! | Operation            | Success                    | Failure                          |
//! |----------------------|----------------------------|----------------------------------|
//! | `fetch_current_user` | authenticated(user)        | anonymous, reported in outcome   |
//! | `login` / `signup`   | authenticated (via fetch)  | unchanged, error returned        |
//! | `logout`             | anonymous                  | unchanged, error returned        |
//!
//! Identity responses are fenced: every identity request takes a sequence
//! number, and login/signup/logout advance a fence. A response older than
//! the fence is discarded, so a slow `/auth/me/` cannot resurrect a user
//! after logout.

use crate::error::{ClientError, Result};
use crate::models::{LoginRequest, ProfileUpdate, SignupRequest, User};
use crate::services::ApiClient;
use serde::de::IgnoredAny;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const ME_PATH: &str = "/auth/me/";
pub const LOGIN_PATH: &str = "/auth/login/";
pub const SIGNUP_PATH: &str = "/auth/signup/";
pub const LOGOUT_PATH: &str = "/auth/logout/";

/// Result of `SessionStore::fetch_current_user`.
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server returned this identity; it is now stored.
    Authenticated(User),
    /// 401/403: there is no valid session. State cleared.
    NoSession,
    /// Network failure, server error or bad payload. State cleared.
    Unavailable(ClientError),
    /// A newer login/logout/fetch completed first; state left alone.
    Superseded,
}

impl FetchOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, FetchOutcome::Authenticated(_))
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            FetchOutcome::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Identity plus request fencing counters.
#[derive(Debug, Default)]
struct SessionState {
    user: Option<User>,
    /// Last sequence number handed out
    next_seq: u64,
    /// Responses with a sequence at or below this are stale
    fence: u64,
}

impl SessionState {
    fn begin_request(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Invalidate every identity request currently in flight.
    fn advance_fence(&mut self) {
        self.fence = self.begin_request();
    }

    /// Accept a response for `seq` if nothing newer has landed; older
    /// requests still in flight become stale.
    fn try_apply(&mut self, seq: u64) -> bool {
        if seq <= self.fence {
            return false;
        }
        self.fence = seq;
        true
    }
}

/// Marks the store as loading for as long as it is alive.
struct LoadingGuard(Arc<AtomicUsize>);

impl LoadingGuard {
    fn new(in_flight: &Arc<AtomicUsize>) -> Self {
        in_flight.fetch_add(1, Ordering::SeqCst);
        Self(in_flight.clone())
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Auth state shared by everything that holds a clone.
#[derive(Clone)]
pub struct SessionStore {
    api: ApiClient,
    state: Arc<RwLock<SessionState>>,
    in_flight: Arc<AtomicUsize>,
}

impl SessionStore {
    /// Create an anonymous store using the given transport.
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(SessionState::default())),
            in_flight: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Snapshot of the stored user.
    pub async fn current_user(&self) -> Option<User> {
        self.state.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    /// True while any store operation is awaiting the server.
    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Read the current identity from `/auth/me/` and store it.
    ///
    /// Never fails: any error clears the stored user and is reported in the
    /// outcome instead.
    pub async fn fetch_current_user(&self) -> FetchOutcome {
        let _loading = LoadingGuard::new(&self.in_flight);
        let seq = self.state.write().await.begin_request();

        let result = self.api.get::<User>(ME_PATH).await;

        let mut state = self.state.write().await;
        if !state.try_apply(seq) {
            tracing::debug!(seq, "Discarding superseded identity response");
            return FetchOutcome::Superseded;
        }

        match result {
            Ok(user) => {
                tracing::debug!(user_id = user.id, "Identity refreshed");
                state.user = Some(user.clone());
                FetchOutcome::Authenticated(user)
            }
            Err(e) if e.is_auth_error() => {
                tracing::debug!(status = ?e.status(), "No active session");
                state.user = None;
                FetchOutcome::NoSession
            }
            Err(e) => {
                tracing::warn!(error = %e, "Identity fetch failed, clearing session");
                state.user = None;
                FetchOutcome::Unavailable(e)
            }
        }
    }

    /// Log in with email and password, then load the identity.
    ///
    /// A rejected login is returned as an error and leaves state unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<FetchOutcome> {
        let _loading = LoadingGuard::new(&self.in_flight);
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        self.api.post::<IgnoredAny, _>(LOGIN_PATH, &body).await?;
        self.state.write().await.advance_fence();
        tracing::info!("Login accepted");

        Ok(self.fetch_current_user().await)
    }

    /// Create an account (server logs it in), then load the identity.
    ///
    /// A rejected signup is returned as an error and leaves state unchanged.
    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        access_code: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<FetchOutcome> {
        let _loading = LoadingGuard::new(&self.in_flight);
        let body = SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
            access_code: access_code.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
        };

        self.api.post::<IgnoredAny, _>(SIGNUP_PATH, &body).await?;
        self.state.write().await.advance_fence();
        tracing::info!("Signup accepted");

        Ok(self.fetch_current_user().await)
    }

    /// End the server session, then forget the local identity.
    ///
    /// If the request fails the stored user is kept and the error returned.
    pub async fn logout(&self) -> Result<()> {
        let _loading = LoadingGuard::new(&self.in_flight);

        self.api.post_empty::<IgnoredAny>(LOGOUT_PATH).await?;

        let mut state = self.state.write().await;
        state.advance_fence();
        let previous = state.user.take();
        tracing::info!(user_id = previous.map(|u| u.id), "Logged out");
        Ok(())
    }

    /// Update first/last name; the stored user is replaced with the server's copy.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<User> {
        let _loading = LoadingGuard::new(&self.in_flight);
        let seq = self.state.write().await.begin_request();

        let user: User = self.api.patch(ME_PATH, update).await?;

        let mut state = self.state.write().await;
        if state.try_apply(seq) {
            state.user = Some(user.clone());
        }
        Ok(user)
    }
}
