// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde::{Deserialize, Serialize};

/// Block of a doctor's time on a given date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub id: u64,
    /// Doctor id
    pub doctor: u64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_available")]
    pub is_available: bool,
}

fn default_available() -> bool {
    true
}

/// Writable schedule slot fields.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleSlotInput {
    pub doctor: u64,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
}
