// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Errors surfaced by the admin API client.

use crate::session::SessionError;
use reqwest::StatusCode;
use serde_json::Value;

/// Failure of a backend call, after any transparent refresh.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure (connect, timeout, TLS); never retried.
    #[error("Request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// Success response whose body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Non-success status other than an unrecoverable 401.
    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// 401 that could not be recovered by a refresh (no refresh credential,
    /// or rejected again after the retry).
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// The refresh credential was rejected or the refresh call failed.
    /// Stored credentials have been cleared; the caller should send the
    /// user back to login.
    #[error("Authentication expired: {0}")]
    AuthExpired(String),

    #[error("Credential store error: {0}")]
    Session(#[from] SessionError),
}

impl ApiError {
    /// True when the application shell should route to the login screen.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Unauthorized { .. } | ApiError::AuthExpired(_)
        )
    }

    /// HTTP status carried by the error, if it came from a response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Unauthorized { .. } => Some(StatusCode::UNAUTHORIZED),
            ApiError::Network(e) => e.status(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Build an error from a non-success response, consuming its body.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body).unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        });

        if status == StatusCode::UNAUTHORIZED {
            ApiError::Unauthorized { message }
        } else {
            ApiError::Status { status, message }
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Understands the shapes the backend produces: `{"detail": ..}`,
/// `{"error": ..}`, `{"non_field_errors": [..]}`, field error maps such as
/// `{"email": ["Enter a valid email address."]}`, and bare JSON lists.
/// Falls back to the raw text for non-JSON bodies.
pub fn error_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let value: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return Some(body.to_string()),
    };

    match &value {
        Value::Object(map) => {
            for key in ["detail", "error", "message", "non_field_errors"] {
                if let Some(msg) = map.get(key).and_then(first_text) {
                    return Some(msg);
                }
            }
            map.iter()
                .find_map(|(field, v)| first_text(v).map(|msg| format!("{}: {}", field, msg)))
        }
        other => first_text(other),
    }
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}
