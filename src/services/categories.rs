// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Muscle group (`/muscle-groups/`) and tag (`/tags/`) endpoints.
//!
//! Both resources share a shape; defaults (`is_default`) are global and the
//! server refuses to edit or delete them.

use super::ApiClient;
use crate::error::Result;
use crate::models::{Category, NewCategory};
use serde::de::IgnoredAny;

/// Which label collection a `CategoryService` talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    MuscleGroup,
    Tag,
}

impl CategoryKind {
    fn collection(self) -> &'static str {
        match self {
            CategoryKind::MuscleGroup => "/muscle-groups/",
            CategoryKind::Tag => "/tags/",
        }
    }
}

#[derive(Clone)]
pub struct CategoryService {
    api: ApiClient,
    kind: CategoryKind,
}

impl CategoryService {
    pub fn new(api: ApiClient, kind: CategoryKind) -> Self {
        Self { api, kind }
    }

    pub fn kind(&self) -> CategoryKind {
        self.kind
    }

    /// The user's own labels plus the global defaults.
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.api.get(self.kind.collection()).await
    }

    pub async fn create(&self, category: &NewCategory) -> Result<Category> {
        self.api.post(self.kind.collection(), category).await
    }

    pub async fn update(&self, id: u64, category: &NewCategory) -> Result<Category> {
        self.api.patch(&self.item_path(id), category).await
    }

    pub async fn delete(&self, id: u64) -> Result<()> {
        self.api.delete::<IgnoredAny>(&self.item_path(id)).await?;
        tracing::debug!(kind = ?self.kind(), id, "Label deleted");
        Ok(())
    }

    fn item_path(&self, id: u64) -> String {
        format!("{}{id}/", self.kind.collection())
    }
}
