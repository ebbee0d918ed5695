// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde::{Deserialize, Serialize};

/// Clinic service (treatment) with its list price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    /// Decimal string, e.g. "1500.00"
    pub price: String,
    pub duration_minutes: u32,
}

/// Writable service fields.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInput {
    pub name: String,
    pub price: String,
    pub duration_minutes: u32,
}
