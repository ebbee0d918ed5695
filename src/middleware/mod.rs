// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (locale routing, response headers).

pub mod headers;
pub mod locale;

pub use locale::{resolve_locale, RequestLocale};
