// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use super::Collection;
use crate::client::{ApiClient, ApiError};
use crate::models::{Service, ServiceInput};

/// `/services/` endpoints.
pub struct ServicesApi<'a> {
    inner: Collection<'a>,
}

impl<'a> ServicesApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            inner: Collection::new(client, "/services/"),
        }
    }

    pub async fn list(&self) -> Result<Vec<Service>, ApiError> {
        self.inner.list().await
    }

    pub async fn get(&self, id: u64) -> Result<Service, ApiError> {
        self.inner.get(id).await
    }

    pub async fn create(&self, input: &ServiceInput) -> Result<Service, ApiError> {
        self.inner.create(input).await
    }

    pub async fn update(&self, id: u64, input: &ServiceInput) -> Result<Service, ApiError> {
        self.inner.update(id, input).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.inner.delete(id).await
    }
}
