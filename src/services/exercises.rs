// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise definition endpoints (`/exercises/`).

use super::{not_found_as_none, ApiClient};
use crate::error::Result;
use crate::models::{
    ExerciseCompletionDetail, ExerciseQuery, ExerciseSummary, ExerciseUpdate, NewExercise,
};
use serde::de::IgnoredAny;

#[derive(Clone)]
pub struct ExerciseService {
    api: ApiClient,
}

impl ExerciseService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List exercises, filtered and sorted server-side.
    pub async fn list(&self, query: &ExerciseQuery) -> Result<Vec<ExerciseSummary>> {
        self.api.get_with_query("/exercises/", query).await
    }

    pub async fn get(&self, id: u64) -> Result<ExerciseSummary> {
        self.api.get(&format!("/exercises/{id}/")).await
    }

    pub async fn create(&self, exercise: &NewExercise) -> Result<ExerciseSummary> {
        self.api.post("/exercises/", exercise).await
    }

    pub async fn update(&self, id: u64, update: &ExerciseUpdate) -> Result<ExerciseSummary> {
        self.api.patch(&format!("/exercises/{id}/"), update).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.api
            .delete::<IgnoredAny>(&format!("/exercises/{id}/"))
            .await?;
        Ok(())
    }

    /// Most recent completion from a closed session, for "last time" hints.
    pub async fn last_completion(&self, id: u64) -> Result<Option<ExerciseCompletionDetail>> {
        not_found_as_none(
            self.api
                .get(&format!("/exercises/{id}/last_completion/"))
                .await,
        )
    }
}
