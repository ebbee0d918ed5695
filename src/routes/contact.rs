// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Contact page and contact-form endpoint.
//!
//! Submissions are validated and acknowledged; nothing is sent or stored.

use super::site::{page_document, PageDocument};
use crate::content::Page;
use crate::error::{AppError, Result};
use crate::middleware::RequestLocale;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Extension, Json, Router,
};
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;
use validator::Validate;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/{locale}/contact", get(contact_page).post(submit_contact))
}

/// Contact form fields.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    /// The form sends `""` when the field is left empty.
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(length(min = 6, max = 30))]
    pub phone: Option<String>,
    #[validate(length(min = 10, max = 2000))]
    pub message: String,
}

fn blank_as_none<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty()))
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

async fn contact_page(
    State(state): State<Arc<AppState>>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
) -> Json<PageDocument> {
    Json(page_document(&state, locale, Page::Contact))
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
    payload: std::result::Result<Json<ContactForm>, JsonRejection>,
) -> Result<Json<ContactResponse>> {
    let Json(form) = payload.map_err(|rejection| {
        let message = state.catalogs.lookup(locale, "contact.form.invalid");
        tracing::info!(%locale, error = %rejection.body_text(), "Contact form unreadable");
        match rejection {
            // Well-formed JSON with missing or mistyped fields
            JsonRejection::JsonDataError(_) => AppError::Validation {
                message,
                fields: Vec::new(),
            },
            _ => AppError::BadRequest(message),
        }
    })?;

    if let Err(errors) = form.validate() {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        fields.sort();

        tracing::info!(%locale, fields = ?fields, "Contact form rejected");
        return Err(AppError::Validation {
            message: state.catalogs.lookup(locale, "contact.form.invalid"),
            fields,
        });
    }

    tracing::info!(
        %locale,
        has_phone = form.phone.is_some(),
        message_len = form.message.len(),
        "Contact form received"
    );

    let name = form.name.trim();
    Ok(Json(ContactResponse {
        success: true,
        message: state
            .catalogs
            .lookup_with(locale, "contact.form.success", &[("name", name)]),
    }))
}
