// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Localized page documents.
//!
//! Each page is served as JSON: the catalog sections it renders, the shared
//! layout strings, links to the same page in the other languages, and the
//! static clinic facts it displays.

use crate::content::{
    Page, CLINIC_EMAIL, HOME_STATS, LOCATIONS, SERVICE_KEYS, TEAM, WORKING_HOURS,
};
use crate::error::AppError;
use crate::i18n::Locale;
use crate::middleware::RequestLocale;
use crate::AppState;
use axum::{
    extract::{Request, State},
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Catalog sections every page needs (header, footer, document title).
const LAYOUT_SECTIONS: [&str; 4] = ["meta", "nav", "footer", "errors"];

/// Localized page routes. The locale middleware is applied in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/{locale}", get(home))
        .route("/{locale}/about", get(about))
        .route("/{locale}/services", get(services))
        .route("/{locale}/locations", get(locations))
        .route("/{locale}/messages", get(messages))
}

/// Link to the current page in another language.
#[derive(Debug, Serialize)]
pub struct Alternate {
    pub locale: Locale,
    pub name: &'static str,
    pub href: String,
}

/// Everything needed to render one page in one language.
#[derive(Debug, Serialize)]
pub struct PageDocument {
    pub locale: Locale,
    pub page: Page,
    pub alternates: Vec<Alternate>,
    pub layout: Map<String, Value>,
    pub messages: Map<String, Value>,
    pub data: Value,
}

/// Assemble the document for `page` in `locale`.
pub fn page_document(state: &AppState, locale: Locale, page: Page) -> PageDocument {
    let catalogs = &state.catalogs;
    let collect = |keys: &[&str]| -> Map<String, Value> {
        keys.iter()
            .filter_map(|key| {
                catalogs
                    .section(locale, key)
                    .map(|v| (key.to_string(), v.clone()))
            })
            .collect()
    };

    let alternates = state
        .config
        .locales
        .supported()
        .iter()
        .map(|l| Alternate {
            locale: *l,
            name: l.native_name(),
            href: format!("/{}{}", l, page.path()),
        })
        .collect();

    PageDocument {
        locale,
        page,
        alternates,
        layout: collect(&LAYOUT_SECTIONS[..]),
        messages: collect(page.sections()),
        data: page_data(page),
    }
}

fn page_data(page: Page) -> Value {
    match page {
        Page::Home => json!({
            "stats": HOME_STATS
                .iter()
                .map(|(key, value)| json!({ "key": key, "value": value }))
                .collect::<Vec<_>>(),
            "services": SERVICE_KEYS,
            "team": TEAM,
        }),
        Page::About => json!({ "team": TEAM }),
        Page::Services => json!({ "services": SERVICE_KEYS }),
        Page::Locations => json!({ "locations": LOCATIONS }),
        Page::Contact => json!({
            "email": CLINIC_EMAIL,
            "locations": LOCATIONS,
            "workingHours": WORKING_HOURS,
        }),
    }
}

async fn home(
    State(state): State<Arc<AppState>>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
) -> Json<PageDocument> {
    Json(page_document(&state, locale, Page::Home))
}

async fn about(
    State(state): State<Arc<AppState>>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
) -> Json<PageDocument> {
    Json(page_document(&state, locale, Page::About))
}

async fn services(
    State(state): State<Arc<AppState>>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
) -> Json<PageDocument> {
    Json(page_document(&state, locale, Page::Services))
}

async fn locations(
    State(state): State<Arc<AppState>>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
) -> Json<PageDocument> {
    Json(page_document(&state, locale, Page::Locations))
}

/// Whole catalog, for client-side rendering.
async fn messages(
    State(state): State<Arc<AppState>>,
    Extension(RequestLocale(locale)): Extension<RequestLocale>,
) -> Json<Value> {
    Json(state.catalogs.messages(locale).clone())
}

/// Fallback for unknown paths under a locale prefix.
pub async fn not_found(State(state): State<Arc<AppState>>, request: Request) -> AppError {
    let locale = request
        .extensions()
        .get::<RequestLocale>()
        .map(|l| l.0)
        .unwrap_or_else(|| state.config.locales.default_locale());

    tracing::debug!(path = %request.uri().path(), %locale, "Page not found");
    AppError::NotFound(state.catalogs.lookup(locale, "errors.notFound"))
}
