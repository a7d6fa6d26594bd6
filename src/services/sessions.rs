// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gym session endpoints (`/sessions/`).

use super::{not_found_as_none, ApiClient};
use crate::error::Result;
use crate::models::{GymSession, GymSessionUpdate, NewGymSession};
use serde::de::IgnoredAny;

#[derive(Clone)]
pub struct GymSessionService {
    api: ApiClient,
}

impl GymSessionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// All sessions of the current user, newest first.
    pub async fn list(&self) -> Result<Vec<GymSession>> {
        self.api.get("/sessions/").await
    }

    /// Start a session. The server closes any session still open.
    pub async fn create(&self, session: &NewGymSession) -> Result<GymSession> {
        let created: GymSession = self.api.post("/sessions/", session).await?;
        tracing::info!(session_id = created.id, "Gym session started");
        Ok(created)
    }

    pub async fn get(&self, id: u64) -> Result<GymSession> {
        self.api.get(&format!("/sessions/{id}/")).await
    }

    pub async fn update(&self, id: u64, update: &GymSessionUpdate) -> Result<GymSession> {
        self.api.patch(&format!("/sessions/{id}/"), update).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.api
            .delete::<IgnoredAny>(&format!("/sessions/{id}/"))
            .await?;
        Ok(())
    }

    /// The open session, if any.
    pub async fn current(&self) -> Result<Option<GymSession>> {
        not_found_as_none(self.api.get("/sessions/current/").await)
    }

    /// Close a session; the server stamps the end time.
    pub async fn close(&self, id: u64) -> Result<GymSession> {
        let closed: GymSession = self.api.post_empty(&format!("/sessions/{id}/close/")).await?;
        tracing::info!(session_id = id, "Gym session closed");
        Ok(closed)
    }

    /// Reopen a closed session, closing whichever one is open.
    pub async fn reopen(&self, id: u64) -> Result<GymSession> {
        self.api.post_empty(&format!("/sessions/{id}/reopen/")).await
    }
}
