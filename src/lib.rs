// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Clinic portal: admin API client and localized public site.
//!
//! The [`client`] module talks to the clinic backend with bearer tokens and
//! transparent token refresh; [`resources`] wraps its endpoints. The
//! [`routes`] module serves the public site in each supported language.

pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod middleware;
pub mod models;
pub mod resources;
pub mod routes;
pub mod session;

use config::Config;
use i18n::Catalogs;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub catalogs: Catalogs,
}
