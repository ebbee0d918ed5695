// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use serde::{Deserialize, Serialize};

/// Doctor record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u64,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
}

/// Writable doctor fields (create and full update).
#[derive(Debug, Clone, Serialize)]
pub struct DoctorInput {
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture_url: Option<String>,
}
