// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use super::Collection;
use crate::client::{ApiClient, ApiError};
use crate::models::{Shift, ShiftInput, ShiftPatch};
use reqwest::Method;

/// `/shifts/` endpoints.
pub struct ShiftsApi<'a> {
    inner: Collection<'a>,
}

impl<'a> ShiftsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            inner: Collection::new(client, "/shifts/"),
        }
    }

    pub async fn list(&self) -> Result<Vec<Shift>, ApiError> {
        self.inner.list().await
    }

    pub async fn get(&self, id: u64) -> Result<Shift, ApiError> {
        self.inner.get(id).await
    }

    pub async fn create(&self, input: &ShiftInput) -> Result<Shift, ApiError> {
        self.inner.create(input).await
    }

    pub async fn update(&self, id: u64, input: &ShiftInput) -> Result<Shift, ApiError> {
        self.inner.update(id, input).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.inner.delete(id).await
    }

    /// Partial update: `PATCH /shifts/{id}/update_shift/`.
    pub async fn update_shift(&self, id: u64, patch: &ShiftPatch) -> Result<Shift, ApiError> {
        let path = format!("{}update_shift/", self.inner.item_path(id));
        self.inner
            .client()
            .send_json(Method::PATCH, path, patch)
            .await
    }
}
