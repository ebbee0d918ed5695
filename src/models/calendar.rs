// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly calendar view: shifts and appointments per day.

use super::{Appointment, Doctor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One shift slot on a calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarShift {
    pub id: u64,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub doctors: Vec<Doctor>,
}

/// First/second shift of a day; either may be unscheduled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarShifts {
    #[serde(default)]
    pub first: Option<CalendarShift>,
    #[serde(default)]
    pub second: Option<CalendarShift>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: String,
    pub day_name: String,
    #[serde(default)]
    pub shifts: CalendarShifts,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}

/// Calendar keyed by day name ("Monday", ...).
pub type CalendarData = BTreeMap<String, CalendarDay>;
