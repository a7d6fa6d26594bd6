// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise events (sets and splits) in read and write shapes.
//!
//! The API serializes decimals as strings, so the read shape keeps them as
//! text. The write shape uses numbers. Convert with the `*_value` accessors
//! or `ExerciseEventPayload::from_event`.

use super::parse_decimal;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A set or split as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEvent {
    pub id: u64,
    pub order_index: u32,
    pub reps: Option<u32>,
    pub duration_seconds: Option<u32>,
    /// Decimal as text, e.g. "62.50"
    pub weight: Option<String>,
    /// Decimal as text
    pub distance: Option<String>,
    /// Decimal as text
    #[serde(default)]
    pub resistance_numeric: Option<String>,
    #[serde(default)]
    pub resistance_string: Option<String>,
    #[serde(default)]
    pub note: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Events nested in completion and session payloads have the same shape.
pub type ExerciseEventSummary = ExerciseEvent;

impl ExerciseEvent {
    pub fn weight_value(&self) -> Result<Option<f64>> {
        parse_decimal("weight", self.weight.as_deref())
    }

    pub fn distance_value(&self) -> Result<Option<f64>> {
        parse_decimal("distance", self.distance.as_deref())
    }

    pub fn resistance_value(&self) -> Result<Option<f64>> {
        parse_decimal("resistance_numeric", self.resistance_numeric.as_deref())
    }

    /// Training volume of a set (reps × weight), when both are tracked.
    pub fn volume(&self) -> Result<Option<f64>> {
        let weight = self.weight_value()?;
        Ok(match (self.reps, weight) {
            (Some(reps), Some(weight)) => Some(f64::from(reps) * weight),
            _ => None,
        })
    }
}

/// Body for creating or updating an event (`/events/`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEventPayload {
    /// Owning completion ID
    pub completion: u64,
    pub order_index: u32,
    pub reps: Option<u32>,
    pub weight: Option<f64>,
    pub distance: Option<f64>,
    pub duration_seconds: Option<u32>,
    pub resistance_numeric: Option<f64>,
    pub resistance_string: Option<String>,
    pub note: String,
}

impl ExerciseEventPayload {
    /// Empty payload for the next set of a completion.
    pub fn new(completion: u64, order_index: u32) -> Self {
        Self {
            completion,
            order_index,
            reps: None,
            weight: None,
            distance: None,
            duration_seconds: None,
            resistance_numeric: None,
            resistance_string: None,
            note: String::new(),
        }
    }

    /// Copy an existing event into a write payload, parsing its decimals.
    pub fn from_event(completion: u64, event: &ExerciseEvent) -> Result<Self> {
        Ok(Self {
            completion,
            order_index: event.order_index,
            reps: event.reps,
            weight: event.weight_value()?,
            distance: event.distance_value()?,
            duration_seconds: event.duration_seconds,
            resistance_numeric: event.resistance_value()?,
            resistance_string: event.resistance_string.clone(),
            note: event.note.clone(),
        })
    }

    /// Pre-fill a new set from the previous set's values.
    pub fn from_prefill(completion: u64, order_index: u32, prefill: &PrefillValues) -> Result<Self> {
        Ok(Self {
            reps: prefill.reps,
            weight: parse_decimal("weight", prefill.weight.as_deref())?,
            distance: parse_decimal("distance", prefill.distance.as_deref())?,
            duration_seconds: prefill.duration_seconds,
            resistance_numeric: parse_decimal("resistance", prefill.resistance.as_deref())?,
            ..Self::new(completion, order_index)
        })
    }
}

/// Last recorded values of a completion (`/exercise-completions/{id}/last_values/`).
///
/// The server answers `{}` when the completion has no events yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrefillValues {
    #[serde(default)]
    pub reps: Option<u32>,
    #[serde(default)]
    pub weight: Option<String>,
    #[serde(default)]
    pub distance: Option<String>,
    #[serde(default)]
    pub duration_seconds: Option<u32>,
    #[serde(default)]
    pub resistance: Option<String>,
}

impl PrefillValues {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use serde_json::json;

    fn event_json() -> serde_json::Value {
        json!({
            "id": 7,
            "order_index": 2,
            "reps": 8,
            "duration_seconds": null,
            "weight": "62.50",
            "distance": null,
            "resistance_numeric": null,
            "resistance_string": "band: red",
            "note": "",
            "created_at": "2025-03-01T10:00:00Z",
            "updated_at": "2025-03-01T10:00:00Z"
        })
    }

    #[test]
    fn test_event_keeps_decimals_as_text() {
        let event: ExerciseEvent = serde_json::from_value(event_json()).unwrap();
        assert_eq!(event.weight.as_deref(), Some("62.50"));
        assert_eq!(event.weight_value().unwrap(), Some(62.5));
        assert_eq!(event.distance_value().unwrap(), None);
        assert_eq!(event.volume().unwrap(), Some(500.0));
    }

    #[test]
    fn test_payload_uses_numbers() {
        let event: ExerciseEvent = serde_json::from_value(event_json()).unwrap();
        let payload = ExerciseEventPayload::from_event(3, &event).unwrap();
        let body = serde_json::to_value(&payload).unwrap();

        assert_eq!(body["completion"], json!(3));
        assert_eq!(body["weight"], json!(62.5));
        assert_eq!(body["distance"], json!(null));
        assert_eq!(body["resistance_string"], json!("band: red"));
    }

    #[test]
    fn test_bad_decimal_is_reported() {
        let mut event: ExerciseEvent = serde_json::from_value(event_json()).unwrap();
        event.weight = Some("heavy".to_string());
        match ExerciseEventPayload::from_event(3, &event) {
            Err(ClientError::InvalidDecimal { field, value }) => {
                assert_eq!(field, "weight");
                assert_eq!(value, "heavy");
            }
            other => panic!("expected InvalidDecimal, got {other:?}"),
        }
    }

    #[test]
    fn test_prefill_from_empty_object() {
        let prefill: PrefillValues = serde_json::from_value(json!({})).unwrap();
        assert!(prefill.is_empty());

        let prefill: PrefillValues = serde_json::from_value(json!({
            "reps": 10, "weight": "40.00", "distance": null,
            "duration_seconds": null, "resistance": "3.50"
        }))
        .unwrap();
        let payload = ExerciseEventPayload::from_prefill(9, 4, &prefill).unwrap();
        assert_eq!(payload.reps, Some(10));
        assert_eq!(payload.weight, Some(40.0));
        assert_eq!(payload.resistance_numeric, Some(3.5));
        assert_eq!(payload.order_index, 4);
        assert!(payload.note.is_empty());
    }
}
