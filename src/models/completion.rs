// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise completions: one exercise performed within a gym session.

use super::{Exercise, ExerciseEventSummary};
use serde::{Deserialize, Serialize};

/// Completion as nested inside a `GymSession`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCompletionSummary {
    pub id: u64,
    pub exercise: Exercise,
    #[serde(default)]
    pub note: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub events: Vec<ExerciseEventSummary>,
}

/// Completion as returned by `/exercise-completions/{id}/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseCompletionDetail {
    pub id: u64,
    /// Owning gym session ID
    pub session: u64,
    pub exercise: Exercise,
    #[serde(default)]
    pub note: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(default)]
    pub events: Vec<ExerciseEventSummary>,
}

impl ExerciseCompletionDetail {
    /// `order_index` for the next set appended to this completion.
    pub fn next_order_index(&self) -> u32 {
        self.events
            .iter()
            .map(|e| e.order_index)
            .max()
            .map_or(1, |max| max + 1)
    }
}

/// Body of `POST /exercise-completions/`.
#[derive(Debug, Clone, Serialize)]
pub struct NewExerciseCompletion {
    pub session: u64,
    pub exercise_id: u64,
    pub note: String,
}

/// Body of `PATCH /exercise-completions/{id}/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExerciseCompletionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
