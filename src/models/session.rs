// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gym session model.

use super::{ExerciseCompletionSummary, UserLocation};
use crate::time_utils::parse_timestamp;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A training session. `end_time == None` means the session is open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GymSession {
    pub id: u64,
    /// ISO 8601
    pub start_time: String,
    /// ISO 8601; `None` while the session is open
    pub end_time: Option<String>,
    pub is_open: bool,
    #[serde(default)]
    pub location: Option<UserLocation>,
    /// Only used when writing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub exercise_completions: Vec<ExerciseCompletionSummary>,
    pub created_at: String,
    pub updated_at: String,
}

impl GymSession {
    /// Elapsed time: start to end, or start to `now` for an open session.
    ///
    /// `None` if a timestamp does not parse.
    pub fn duration(&self, now: DateTime<Utc>) -> Option<Duration> {
        let start = parse_timestamp(&self.start_time)?;
        let end = match &self.end_time {
            Some(end) => parse_timestamp(end)?,
            None => now,
        };
        Some(end - start)
    }

    /// Number of recorded sets across all completions.
    pub fn total_sets(&self) -> usize {
        self.exercise_completions
            .iter()
            .map(|c| c.events.len())
            .sum()
    }
}

/// Body of `POST /sessions/`. The server closes any other open session.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewGymSession {
    /// Defaults to now server-side
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<u64>,
    pub note: String,
}

/// Body of `PATCH /sessions/{id}/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GymSessionUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// `Some(None)` clears the location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<Option<u64>>,
}
