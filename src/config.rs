// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! Covers both surfaces: the admin API client (backend URL, timeout,
//! credential file) and the public site server (port, CORS origin, locales).

use crate::i18n::{Locale, LocaleConfig};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default backend API root.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000/api";

const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    // --- Admin API client ---
    /// Backend REST API root, without trailing slash
    pub api_base_url: String,
    /// Per-request timeout for backend calls
    pub api_timeout: Duration,
    /// Where to persist credentials; in-memory only when unset
    pub credentials_path: Option<PathBuf>,

    // --- Public site ---
    /// Public site origin, allowed for CORS
    pub site_url: String,
    /// Server port
    pub port: u16,
    /// Supported locales and the fallback
    pub locales: LocaleConfig,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout: Duration::from_secs(5),
            credentials_path: None,
            site_url: "http://localhost:3000".to_string(),
            port: 8080,
            locales: LocaleConfig::default(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file is honoured for local development.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_timeout_secs = match var("API_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid("API_TIMEOUT_SECS", raw))?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        let default_locale = match var("DEFAULT_LOCALE") {
            Some(raw) => raw
                .parse::<Locale>()
                .map_err(|_| ConfigError::Invalid("DEFAULT_LOCALE", raw))?,
            None => Locale::Mk,
        };

        let supported = match var("SUPPORTED_LOCALES") {
            Some(raw) => raw
                .split(',')
                .map(|tag| tag.parse::<Locale>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|_| ConfigError::Invalid("SUPPORTED_LOCALES", raw))?,
            None => Locale::ALL.to_vec(),
        };

        let locales = LocaleConfig::new(supported, default_locale).ok_or_else(|| {
            ConfigError::Invalid(
                "DEFAULT_LOCALE",
                format!("{} is not in SUPPORTED_LOCALES", default_locale),
            )
        })?;

        Ok(Self {
            api_base_url: var("API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            api_timeout: Duration::from_secs(api_timeout_secs),
            credentials_path: var("CREDENTIALS_PATH").map(PathBuf::from),
            site_url: var("SITE_URL").unwrap_or_else(|| "http://localhost:3000".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            locales,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
