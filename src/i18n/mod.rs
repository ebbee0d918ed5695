// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Locale resolution for the public site.
//!
//! Every page lives under a `/{locale}` prefix. Requests without a supported
//! prefix are redirected to the preferred locale, chosen from the locale
//! cookie, then `Accept-Language`, then the configured default.

pub mod catalog;

pub use catalog::Catalogs;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cookie remembering the visitor's last locale.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Languages the clinic publishes content in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Macedonian
    Mk,
    /// English
    En,
    /// Bulgarian
    Bg,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Mk, Locale::En, Locale::Bg];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Mk => "mk",
            Locale::En => "en",
            Locale::Bg => "bg",
        }
    }

    /// Name of the language in that language (for the language switcher).
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::Mk => "Македонски",
            Locale::En => "English",
            Locale::Bg => "Български",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported locale: {0}")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mk" => Ok(Locale::Mk),
            "en" => Ok(Locale::En),
            "bg" => Ok(Locale::Bg),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Result of resolving a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Path carries a supported prefix; `rest` is the remainder ("/" at least).
    Localized { locale: Locale, rest: String },
    /// Path must be re-requested under a locale prefix.
    Redirect { locale: Locale, location: String },
}

/// Supported locales plus the fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleConfig {
    supported: Vec<Locale>,
    default: Locale,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            supported: Locale::ALL.to_vec(),
            default: Locale::Mk,
        }
    }
}

impl LocaleConfig {
    /// Returns `None` if the default is not among the supported locales.
    pub fn new(supported: Vec<Locale>, default: Locale) -> Option<Self> {
        if !supported.contains(&default) {
            return None;
        }
        Some(Self { supported, default })
    }

    pub fn supported(&self) -> &[Locale] {
        &self.supported
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }

    pub fn is_supported(&self, locale: Locale) -> bool {
        self.supported.contains(&locale)
    }

    /// Parse a tag and accept it only if supported.
    pub fn parse_supported(&self, tag: &str) -> Option<Locale> {
        tag.parse().ok().filter(|l| self.is_supported(*l))
    }

    /// Resolve `path` given the visitor's cookie and `Accept-Language` value.
    pub fn resolve(
        &self,
        path: &str,
        cookie: Option<&str>,
        accept_language: Option<&str>,
    ) -> Resolution {
        let trimmed = path.trim_start_matches('/');
        let (first, rest) = match trimmed.find('/') {
            Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
            None => (trimmed, ""),
        };

        if let Some(locale) = self.parse_supported(first) {
            let rest = if rest.is_empty() { "/" } else { rest };
            return Resolution::Localized {
                locale,
                rest: rest.to_string(),
            };
        }

        let locale = self.preferred(cookie, accept_language);
        let location = if trimmed.is_empty() {
            format!("/{}", locale)
        } else {
            format!("/{}/{}", locale, trimmed)
        };
        Resolution::Redirect { locale, location }
    }

    /// Pick the locale for a visitor without an explicit prefix.
    pub fn preferred(&self, cookie: Option<&str>, accept_language: Option<&str>) -> Locale {
        cookie
            .and_then(|c| self.parse_supported(c))
            .or_else(|| accept_language.and_then(|h| self.negotiate(h)))
            .unwrap_or(self.default)
    }

    /// Best supported locale for an `Accept-Language` header.
    ///
    /// Language ranges are ordered by q-value (stable for ties) and matched on
    /// their primary subtag, so `en-GB` selects `en`. `q=0` ranges and `*`
    /// are ignored.
    pub fn negotiate(&self, header: &str) -> Option<Locale> {
        let mut ranges: Vec<(&str, f32)> = header
            .split(',')
            .filter_map(|part| {
                let mut pieces = part.split(';');
                let tag = pieces.next()?.trim();
                if tag.is_empty() || tag == "*" {
                    return None;
                }
                let q = pieces
                    .filter_map(|p| p.trim().strip_prefix("q="))
                    .find_map(|q| q.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (q > 0.0).then_some((tag, q))
            })
            .collect();

        ranges.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        ranges.into_iter().find_map(|(tag, _)| {
            let primary = tag.split('-').next().unwrap_or(tag);
            self.parse_supported(primary)
        })
    }
}
