// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models mirroring the API's JSON payloads.

pub mod completion;
pub mod event;
pub mod exercise;
pub mod location;
pub mod session;
pub mod user;

pub use completion::{
    ExerciseCompletionDetail, ExerciseCompletionSummary, ExerciseCompletionUpdate,
    NewExerciseCompletion,
};
pub use event::{ExerciseEvent, ExerciseEventPayload, ExerciseEventSummary, PrefillValues};
pub use exercise::{
    Category, Exercise, ExerciseGroup, ExerciseGroupKind, ExerciseOrdering, ExerciseQuery,
    ExerciseSummary, ExerciseUpdate, MiniLabel, NewCategory, NewExercise,
};
pub use location::{NewUserLocation, UserLocation};
pub use session::{GymSession, GymSessionUpdate, NewGymSession};
pub use user::{LoginRequest, ProfileUpdate, SignupRequest, User};

use crate::error::{ClientError, Result};

/// Parse a decimal the API sent as text ("62.50").
pub(crate) fn parse_decimal(field: &'static str, value: Option<&str>) -> Result<Option<f64>> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(Some)
        .ok_or_else(|| ClientError::InvalidDecimal {
            field,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("weight", Some("62.50")).unwrap(), Some(62.5));
        assert_eq!(parse_decimal("weight", Some(" 10 ")).unwrap(), Some(10.0));
        assert_eq!(parse_decimal("weight", Some("")).unwrap(), None);
        assert_eq!(parse_decimal("weight", None).unwrap(), None);
        assert!(parse_decimal("weight", Some("NaN")).is_err());
        assert!(parse_decimal("weight", Some("ten")).is_err());
    }
}
