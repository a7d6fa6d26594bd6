// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise completion (`/exercise-completions/`) and event (`/events/`) endpoints.

use super::ApiClient;
use crate::error::Result;
use crate::models::{
    ExerciseCompletionDetail, ExerciseCompletionUpdate, ExerciseEvent, ExerciseEventPayload,
    NewExerciseCompletion, PrefillValues,
};
use serde::de::IgnoredAny;
use serde::Serialize;

#[derive(Clone)]
pub struct CompletionService {
    api: ApiClient,
}

impl CompletionService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Add an exercise to a session.
    pub async fn create(&self, completion: &NewExerciseCompletion) -> Result<ExerciseCompletionDetail> {
        self.api.post("/exercise-completions/", completion).await
    }

    pub async fn get(&self, id: u64) -> Result<ExerciseCompletionDetail> {
        self.api.get(&format!("/exercise-completions/{id}/")).await
    }

    pub async fn update(
        &self,
        id: u64,
        update: &ExerciseCompletionUpdate,
    ) -> Result<ExerciseCompletionDetail> {
        self.api
            .patch(&format!("/exercise-completions/{id}/"), update)
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.api
            .delete::<IgnoredAny>(&format!("/exercise-completions/{id}/"))
            .await?;
        Ok(())
    }

    /// Values of the completion's latest set, for pre-filling the next one.
    pub async fn last_values(&self, id: u64) -> Result<PrefillValues> {
        self.api
            .get(&format!("/exercise-completions/{id}/last_values/"))
            .await
    }
}

#[derive(Serialize)]
struct EventFilter {
    completion: u64,
}

#[derive(Clone)]
pub struct EventService {
    api: ApiClient,
}

impl EventService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Events of the current user, optionally limited to one completion.
    pub async fn list(&self, completion: Option<u64>) -> Result<Vec<ExerciseEvent>> {
        match completion {
            Some(completion) => {
                self.api
                    .get_with_query("/events/", &EventFilter { completion })
                    .await
            }
            None => self.api.get("/events/").await,
        }
    }

    /// Record a set or split.
    pub async fn create(&self, payload: &ExerciseEventPayload) -> Result<ExerciseEvent> {
        let event: ExerciseEvent = self.api.post("/events/", payload).await?;
        tracing::debug!(
            event_id = event.id,
            completion_id = payload.completion,
            "Exercise event recorded"
        );
        Ok(event)
    }

    pub async fn update(&self, id: u64, payload: &ExerciseEventPayload) -> Result<ExerciseEvent> {
        self.api.patch(&format!("/events/{id}/"), payload).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.api
            .delete::<IgnoredAny>(&format!("/events/{id}/"))
            .await?;
        Ok(())
    }
}
