// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly shift records.

use super::Doctor;
use serde::{Deserialize, Serialize};

/// Morning or afternoon shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftType {
    First,
    Second,
}

/// Shift as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: u64,
    /// ISO week number
    pub week_of_year: u32,
    /// 0 = Monday
    pub day_of_week: u32,
    pub day_name: String,
    pub shift_type: ShiftType,
    /// "HH:MM:SS"
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
    #[serde(default)]
    pub doctor_ids: Option<Vec<u64>>,
}

/// Writable shift fields (create and full update).
#[derive(Debug, Clone, Serialize)]
pub struct ShiftInput {
    pub week_of_year: u32,
    pub day_of_week: u32,
    pub shift_type: ShiftType,
    pub start_time: String,
    pub end_time: String,
    pub doctor_ids: Vec<u64>,
}

/// Partial shift update; unset fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShiftPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_type: Option<ShiftType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctor_ids: Option<Vec<u64>>,
}
