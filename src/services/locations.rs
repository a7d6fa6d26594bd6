// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Saved location endpoints (`/locations/`).

use super::ApiClient;
use crate::error::Result;
use crate::models::{NewUserLocation, UserLocation};
use serde::de::IgnoredAny;

#[derive(Clone)]
pub struct LocationService {
    api: ApiClient,
}

impl LocationService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Saved locations, most recent first.
    pub async fn list(&self) -> Result<Vec<UserLocation>> {
        self.api.get("/locations/").await
    }

    pub async fn create(&self, location: &NewUserLocation) -> Result<UserLocation> {
        self.api.post("/locations/", location).await
    }

    pub async fn get(&self, id: u64) -> Result<UserLocation> {
        self.api.get(&format!("/locations/{id}/")).await
    }

    pub async fn update(&self, id: u64, location: &NewUserLocation) -> Result<UserLocation> {
        self.api.put(&format!("/locations/{id}/"), location).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.api
            .delete::<IgnoredAny>(&format!("/locations/{id}/"))
            .await?;
        Ok(())
    }

    /// Most recently used location; the server answers 204 when there is none.
    pub async fn most_recent(&self) -> Result<Option<UserLocation>> {
        self.api.get("/locations/most_recent/").await
    }
}
