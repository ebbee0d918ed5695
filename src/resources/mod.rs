// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed access to the backend's resources.
//!
//! Every function maps to exactly one HTTP verb and path and delegates to
//! [`ApiClient`]. No caching or validation happens here; errors from the
//! client are returned unchanged.

pub mod appointments;
pub mod calendar;
pub mod dashboard;
pub mod doctors;
pub mod schedule_slots;
pub mod services;
pub mod shifts;

pub use appointments::AppointmentsApi;
pub use calendar::CalendarApi;
pub use dashboard::DashboardStats;
pub use doctors::DoctorsApi;
pub use schedule_slots::ScheduleSlotsApi;
pub use services::ServicesApi;
pub use shifts::ShiftsApi;

use crate::client::{ApiClient, ApiError, ApiRequest};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

impl ApiClient {
    pub fn doctors(&self) -> DoctorsApi<'_> {
        DoctorsApi::new(self)
    }

    pub fn services(&self) -> ServicesApi<'_> {
        ServicesApi::new(self)
    }

    pub fn shifts(&self) -> ShiftsApi<'_> {
        ShiftsApi::new(self)
    }

    pub fn appointments(&self) -> AppointmentsApi<'_> {
        AppointmentsApi::new(self)
    }

    pub fn schedule_slots(&self) -> ScheduleSlotsApi<'_> {
        ScheduleSlotsApi::new(self)
    }

    pub fn calendar(&self) -> CalendarApi<'_> {
        CalendarApi::new(self)
    }
}

/// Standard list/detail routes under one collection path (`/doctors/`).
#[derive(Clone, Copy)]
pub(crate) struct Collection<'a> {
    client: &'a ApiClient,
    path: &'static str,
}

impl<'a> Collection<'a> {
    pub(crate) fn new(client: &'a ApiClient, path: &'static str) -> Self {
        Self { client, path }
    }

    pub(crate) fn client(&self) -> &'a ApiClient {
        self.client
    }

    /// `/{collection}/{id}/`
    pub(crate) fn item_path(&self, id: u64) -> String {
        format!("{}{}/", self.path, id)
    }

    /// `/{collection}/{action}/` for list-level actions.
    pub(crate) fn action_path(&self, action: &str) -> String {
        format!("{}{}/", self.path, action)
    }

    pub(crate) async fn list<T: DeserializeOwned>(&self) -> Result<Vec<T>, ApiError> {
        self.client.get_json(ApiRequest::get(self.path)).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, id: u64) -> Result<T, ApiError> {
        self.client.get_json(ApiRequest::get(self.item_path(id))).await
    }

    pub(crate) async fn create<B, T>(&self, input: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client.send_json(Method::POST, self.path, input).await
    }

    pub(crate) async fn update<B, T>(&self, id: u64, input: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.client
            .send_json(Method::PUT, self.item_path(id), input)
            .await
    }

    pub(crate) async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.client.delete(self.item_path(id)).await
    }
}
