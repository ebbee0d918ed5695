// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! `/appointments/` endpoints, including the per-doctor query views.

use super::Collection;
use crate::client::{ApiClient, ApiError, ApiRequest};
use crate::models::{
    Appointment, AppointmentInput, AvailableSlot, MonthAppointments, WeekAppointments,
};
use chrono::NaiveDate;

pub struct AppointmentsApi<'a> {
    inner: Collection<'a>,
}

impl<'a> AppointmentsApi<'a> {
    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self {
            inner: Collection::new(client, "/appointments/"),
        }
    }

    pub async fn list(&self) -> Result<Vec<Appointment>, ApiError> {
        self.inner.list().await
    }

    pub async fn get(&self, id: u64) -> Result<Appointment, ApiError> {
        self.inner.get(id).await
    }

    pub async fn create(&self, input: &AppointmentInput) -> Result<Appointment, ApiError> {
        self.inner.create(input).await
    }

    pub async fn update(&self, id: u64, input: &AppointmentInput) -> Result<Appointment, ApiError> {
        self.inner.update(id, input).await
    }

    pub async fn delete(&self, id: u64) -> Result<(), ApiError> {
        self.inner.delete(id).await
    }

    /// Free 30-minute slots of a doctor on `date`.
    pub async fn available_slots(
        &self,
        doctor_id: u64,
        date: NaiveDate,
    ) -> Result<Vec<AvailableSlot>, ApiError> {
        let request = ApiRequest::get(self.inner.action_path("available_slots"))
            .query("doctor_id", doctor_id)
            .query("date", date.format("%Y-%m-%d"));
        self.inner.client().get_json(request).await
    }

    /// Month view for a doctor, keyed by day of month. Only the year and
    /// month of `month` are used.
    pub async fn calendar(
        &self,
        doctor_id: u64,
        month: NaiveDate,
    ) -> Result<MonthAppointments, ApiError> {
        let request = ApiRequest::get(self.inner.action_path("calendar"))
            .query("doctor_id", doctor_id)
            .query("month", month.format("%Y-%m"));
        self.inner.client().get_json(request).await
    }

    /// Seven days starting at `week_start`, keyed by date.
    pub async fn week(
        &self,
        doctor_id: u64,
        week_start: NaiveDate,
    ) -> Result<WeekAppointments, ApiError> {
        let request = ApiRequest::get(self.inner.action_path("week"))
            .query("doctor_id", doctor_id)
            .query("week", week_start.format("%Y-%m-%d"));
        self.inner.client().get_json(request).await
    }

    /// A doctor's appointments on one date.
    pub async fn day(&self, doctor_id: u64, date: NaiveDate) -> Result<Vec<Appointment>, ApiError> {
        let request = ApiRequest::get(self.inner.action_path("day"))
            .query("doctor_id", doctor_id)
            .query("date", date.format("%Y-%m-%d"));
        self.inner.client().get_json(request).await
    }
}
