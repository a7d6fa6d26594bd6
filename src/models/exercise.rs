// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise definitions, labels and list grouping.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Compact muscle group or tag embedded in exercise payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiniLabel {
    pub id: u64,
    pub name: String,
    /// Icon name, e.g. "fitness_center"
    #[serde(default)]
    pub icon: String,
}

/// Full muscle group or tag record (`/muscle-groups/`, `/tags/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Global defaults are read-only for users.
    #[serde(default)]
    pub is_default: bool,
}

/// Body for creating or renaming a muscle group or tag.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Exercise definition as embedded in completions.
///
/// The `track_*` flags decide which inputs a set records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub track_reps: Option<bool>,
    #[serde(default)]
    pub track_weight: Option<bool>,
    #[serde(default)]
    pub track_distance: Option<bool>,
    #[serde(default)]
    pub track_duration: Option<bool>,
    #[serde(default)]
    pub track_resistance_numeric: Option<bool>,
    #[serde(default)]
    pub track_resistance_string: Option<bool>,
    #[serde(default)]
    pub track_notes: Option<bool>,
    #[serde(default)]
    pub muscle_groups: Option<Vec<MiniLabel>>,
}

/// Exercise as listed on `/exercises/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub muscle_groups: Option<Vec<MiniLabel>>,
    #[serde(default)]
    pub tags: Option<Vec<MiniLabel>>,
    /// ISO 8601; absent when never completed
    #[serde(default)]
    pub last_completed_at: Option<String>,
}

/// Body for creating an exercise. Labels are referenced by ID.
#[derive(Debug, Clone, Serialize)]
pub struct NewExercise {
    pub name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub muscle_group_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tag_ids: Vec<u64>,
    pub track_reps: bool,
    pub track_weight: bool,
    pub track_distance: bool,
    pub track_duration: bool,
    pub track_resistance_numeric: bool,
    pub track_resistance_string: bool,
    pub track_notes: bool,
}

impl NewExercise {
    /// A reps-only exercise, matching the server's defaults.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            muscle_group_ids: Vec::new(),
            tag_ids: Vec::new(),
            track_reps: true,
            track_weight: false,
            track_distance: false,
            track_duration: false,
            track_resistance_numeric: false,
            track_resistance_string: false,
            track_notes: false,
        }
    }
}

/// Partial exercise update. `Some(vec![])` clears a label set.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExerciseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_reps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_weight: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_distance: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_duration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_resistance_numeric: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_resistance_string: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_notes: Option<bool>,
}

/// Sort order for the exercise list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseOrdering {
    #[default]
    Name,
    /// Most recently completed first
    Recent,
}

/// Query-string filters for `/exercises/`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExerciseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_group_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordering: Option<ExerciseOrdering>,
}

/// What an `ExerciseGroup` is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseGroupKind {
    MuscleGroup,
    Tag,
    Other,
}

/// A titled section of the exercise list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseGroup {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ExerciseGroupKind,
    #[serde(default)]
    pub icon: Option<String>,
    pub items: Vec<ExerciseSummary>,
}

const OTHER_GROUP_KEY: &str = "other";

impl ExerciseGroup {
    /// Group exercises under each of their muscle groups (or tags).
    ///
    /// An exercise appears once per label it carries; unlabelled exercises
    /// land in a trailing "Other" group. Groups are ordered by label name,
    /// items keep their input order.
    pub fn group_by(items: &[ExerciseSummary], kind: ExerciseGroupKind) -> Vec<ExerciseGroup> {
        let mut groups: BTreeMap<(String, u64), ExerciseGroup> = BTreeMap::new();
        let mut other = Vec::new();

        for item in items {
            let labels = match kind {
                ExerciseGroupKind::MuscleGroup => item.muscle_groups.as_deref(),
                ExerciseGroupKind::Tag => item.tags.as_deref(),
                ExerciseGroupKind::Other => None,
            }
            .unwrap_or_default();

            if labels.is_empty() {
                other.push(item.clone());
                continue;
            }

            for label in labels {
                groups
                    .entry((label.name.to_lowercase(), label.id))
                    .or_insert_with(|| ExerciseGroup {
                        key: format!("{}-{}", kind_prefix(kind), label.id),
                        label: label.name.clone(),
                        kind,
                        icon: (!label.icon.is_empty()).then(|| label.icon.clone()),
                        items: Vec::new(),
                    })
                    .items
                    .push(item.clone());
            }
        }

        let mut result: Vec<ExerciseGroup> = groups.into_values().collect();
        if !other.is_empty() {
            result.push(ExerciseGroup {
                key: OTHER_GROUP_KEY.to_string(),
                label: "Other".to_string(),
                kind: ExerciseGroupKind::Other,
                icon: None,
                items: other,
            });
        }
        result
    }
}

fn kind_prefix(kind: ExerciseGroupKind) -> &'static str {
    match kind {
        ExerciseGroupKind::MuscleGroup => "mg",
        ExerciseGroupKind::Tag => "tag",
        ExerciseGroupKind::Other => OTHER_GROUP_KEY,
    }
}
