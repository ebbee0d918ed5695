// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Message catalogs for the public site.
//!
//! One nested JSON document per locale, embedded at build time. Keys are
//! dotted paths (`contact.workingHours.sunday`). Lookups fall back to the
//! default locale's catalog and finally to the key itself, so a missing
//! translation never breaks a page.

use super::Locale;
use serde_json::Value;
use std::collections::HashMap;

const MK: &str = include_str!("messages/mk.json");
const EN: &str = include_str!("messages/en.json");
const BG: &str = include_str!("messages/bg.json");

static EMPTY: Value = Value::Null;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog for {locale} is not valid JSON: {source}")]
    Parse {
        locale: Locale,
        #[source]
        source: serde_json::Error,
    },

    #[error("Catalog for {0} must be a JSON object")]
    NotAnObject(Locale),

    #[error("No catalog for default locale {0}")]
    MissingDefault(Locale),
}

/// Parsed catalogs for every locale.
#[derive(Debug, Clone)]
pub struct Catalogs {
    messages: HashMap<Locale, Value>,
    default: Locale,
}

impl Catalogs {
    /// Load the embedded catalogs.
    pub fn embedded(default: Locale) -> Result<Self, CatalogError> {
        let mut messages = HashMap::new();
        for (locale, raw) in [(Locale::Mk, MK), (Locale::En, EN), (Locale::Bg, BG)] {
            let value = serde_json::from_str(raw)
                .map_err(|source| CatalogError::Parse { locale, source })?;
            messages.insert(locale, value);
        }
        Self::from_values(default, messages)
    }

    /// Build from already-parsed documents.
    pub fn from_values(
        default: Locale,
        messages: HashMap<Locale, Value>,
    ) -> Result<Self, CatalogError> {
        for (locale, value) in &messages {
            if !value.is_object() {
                return Err(CatalogError::NotAnObject(*locale));
            }
        }
        if !messages.contains_key(&default) {
            return Err(CatalogError::MissingDefault(default));
        }
        Ok(Self { messages, default })
    }

    pub fn default_locale(&self) -> Locale {
        self.default
    }

    /// Whole catalog for a locale (default locale's if absent).
    pub fn messages(&self, locale: Locale) -> &Value {
        self.messages
            .get(&locale)
            .or_else(|| self.messages.get(&self.default))
            .unwrap_or(&EMPTY)
    }

    /// Subtree at `key`, with default-locale fallback.
    pub fn section(&self, locale: Locale, key: &str) -> Option<&Value> {
        self.find(locale, key)
            .or_else(|| self.find(self.default, key))
    }

    /// Translated string at `key`, or the key itself when untranslated.
    pub fn lookup(&self, locale: Locale, key: &str) -> String {
        self.section(locale, key)
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| {
                tracing::debug!(%locale, key, "Missing translation");
                key.to_string()
            })
    }

    /// Like [`lookup`](Self::lookup), substituting `{name}` placeholders.
    ///
    /// Substitution is a single pass over the template: placeholders inside
    /// substituted values are left as they are. Unknown placeholders are kept.
    pub fn lookup_with(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.lookup(locale, key);
        let mut out = String::with_capacity(template.len());
        let mut rest = template.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                rest = &rest[open..];
                break;
            };
            let name = &after[..close];
            match args.iter().find(|(arg, _)| *arg == name) {
                Some((_, value)) => out.push_str(value),
                None => out.push_str(&rest[open..open + close + 2]),
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }

    fn find(&self, locale: Locale, key: &str) -> Option<&Value> {
        let root = self.messages.get(&locale)?;
        key.split('.')
            .try_fold(root, |node, segment| node.get(segment))
    }
}
