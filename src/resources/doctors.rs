// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use super::Collection;
use crate::client::{ApiClient, ApiError};
use crate::models::{Doctor, DoctorInput};

/// `/doctors/` endpoints.
pub struct DoctorsApi<'a> {
    inner: Collection<'a>,
}

impl<'a> DoctorsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            inner: Collection::new(client, "/doctors/"),
        }
    }

    pub async fn list(&self) -> Result<Vec<Doctor>, ApiError> {
        self.inner.list().await
    }

    pub async fn get(&self, id: u64) -> Result<Doctor, ApiError> {
        self.inner.get(id).await
    }

    pub async fn create(&self, input: &DoctorInput) -> Result<Doctor, ApiError> {
        self.inner.create(input).await
    }

    pub async fn update(&self, id: u64, input: &DoctorInput) -> Result<Doctor, ApiError> {
        self.inner.update(id, input).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.inner.delete(id).await
    }
}
