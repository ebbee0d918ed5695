// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Appointment records and the query shapes built on them.

use super::{Doctor, Service};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Appointment as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub patient_full_name: String,
    pub patient_phone_number: String,
    pub doctor: Doctor,
    #[serde(default)]
    pub doctor_id: Option<u64>,
    #[serde(default)]
    pub service: Option<Service>,
    #[serde(default)]
    pub service_id: Option<u64>,
    #[serde(default)]
    pub custom_service_name: Option<String>,
    /// Decimal string
    pub price: String,
    pub duration_minutes: u32,
    /// ISO 8601, as sent by the backend
    pub start_datetime: String,
    pub end_datetime: String,
}

/// Writable appointment fields.
///
/// Either `service_id` or `custom_service_name` is expected; the backend
/// enforces that and fills price/duration from the service when given.
#[derive(Debug, Clone, Serialize)]
pub struct AppointmentInput {
    pub patient_first_name: String,
    pub patient_last_name: String,
    pub patient_phone_number: String,
    pub doctor_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_service_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    pub start_datetime: String,
}

/// Free slot as `(start, end)` times ("HH:MM:SS").
pub type AvailableSlot = (String, String);

/// Appointments keyed by day of month (month view).
pub type MonthAppointments = BTreeMap<String, Vec<Appointment>>;

/// Appointments keyed by date "YYYY-MM-DD" (week view).
pub type WeekAppointments = BTreeMap<String, Vec<Appointment>>;
