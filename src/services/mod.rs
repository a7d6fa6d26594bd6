// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - transport, auth store and REST resources.

pub mod api_client;
pub mod auth;
pub mod categories;
pub mod completions;
pub mod exercises;
pub mod locations;
pub mod sessions;

pub use api_client::ApiClient;
pub use auth::{FetchOutcome, SessionStore};
pub use categories::{CategoryKind, CategoryService};
pub use completions::{CompletionService, EventService};
pub use exercises::ExerciseService;
pub use locations::LocationService;
pub use sessions::GymSessionService;

use crate::error::Result;

/// Treat a 404 as "nothing there" for endpoints that use it that way.
pub(crate) fn not_found_as_none<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
