// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use super::Collection;
use crate::client::{ApiClient, ApiError};
use crate::models::{ScheduleSlot, ScheduleSlotInput};

/// `/schedule-slots/` endpoints.
pub struct ScheduleSlotsApi<'a> {
    inner: Collection<'a>,
}

impl<'a> ScheduleSlotsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            inner: Collection::new(client, "/schedule-slots/"),
        }
    }

    pub async fn list(&self) -> Result<Vec<ScheduleSlot>, ApiError> {
        self.inner.list().await
    }

    pub async fn get(&self, id: u64) -> Result<ScheduleSlot, ApiError> {
        self.inner.get(id).await
    }

    pub async fn create(&self, input: &ScheduleSlotInput) -> Result<ScheduleSlot, ApiError> {
        self.inner.create(input).await
    }

    pub async fn update(
        &self,
        id: u64,
        input: &ScheduleSlotInput,
    ) -> Result<ScheduleSlot, ApiError> {
        self.inner.update(id, input).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.inner.delete(id).await
    }
}
