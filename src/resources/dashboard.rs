// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard summary counts.

use crate::client::{ApiClient, ApiError};
use serde::Serialize;

/// Totals shown on the dashboard home.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_appointments: usize,
    pub total_doctors: usize,
    pub total_services: usize,
    pub total_shifts: usize,
}

impl DashboardStats {
    /// Fetch all four collections concurrently and count them.
    ///
    /// The calls are independent; the first failure fails the whole summary
    /// and the remaining calls are dropped.
    pub async fn fetch(client: &ApiClient) -> Result<Self, ApiError> {
        let appointments = client.appointments();
        let doctors = client.doctors();
        let services = client.services();
        let shifts = client.shifts();

        let (appointments, doctors, services, shifts) = tokio::try_join!(
            appointments.list(),
            doctors.list(),
            services.list(),
            shifts.list(),
        )?;

        Ok(Self {
            total_appointments: appointments.len(),
            total_doctors: doctors.len(),
            total_services: services.len(),
            total_shifts: shifts.len(),
        })
    }
}
