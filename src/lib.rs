// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Gym tracker client: log workouts against the gym tracking API.
//!
//! This crate provides the cookie-session HTTP client (with CSRF token
//! injection), the authentication session store, typed access to the
//! workout resources, and the application's page route table.

pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use error::Result;
use services::{
    ApiClient, CategoryKind, CategoryService, CompletionService, EventService, ExerciseService,
    GymSessionService, LocationService, SessionStore,
};

/// Application root: one transport, one auth store, and the resource
/// services, all sharing the same cookie jar.
///
/// Build one per application (or per test) and pass it where needed.
#[derive(Clone)]
pub struct AppContext {
    pub config: Config,
    pub api: ApiClient,
    pub auth: SessionStore,
    pub sessions: GymSessionService,
    pub exercises: ExerciseService,
    pub completions: CompletionService,
    pub events: EventService,
    pub locations: LocationService,
    pub muscle_groups: CategoryService,
    pub tags: CategoryService,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let api = ApiClient::new(&config)?;

        Ok(Self {
            auth: SessionStore::new(api.clone()),
            sessions: GymSessionService::new(api.clone()),
            exercises: ExerciseService::new(api.clone()),
            completions: CompletionService::new(api.clone()),
            events: EventService::new(api.clone()),
            locations: LocationService::new(api.clone()),
            muscle_groups: CategoryService::new(api.clone(), CategoryKind::MuscleGroup),
            tags: CategoryService::new(api.clone(), CategoryKind::Tag),
            api,
            config,
        })
    }
}
