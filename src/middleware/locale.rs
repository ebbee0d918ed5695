// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Locale-prefix routing middleware.

use crate::i18n::{Locale, Resolution, LOCALE_COOKIE};
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use std::sync::Arc;

/// Locale resolved for the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLocale(pub Locale);

/// One year, matching the lifetime of the language switcher's choice.
const LOCALE_COOKIE_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;

/// Resolve the locale from the path prefix, or redirect to a prefixed path.
///
/// On a localized path the resolved [`RequestLocale`] is inserted as a
/// request extension and the choice is remembered in the locale cookie.
pub async fn resolve_locale(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let accept_language = request
        .headers()
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|h| h.to_str().ok());
    let cookie = jar.get(LOCALE_COOKIE).map(|c| c.value());

    let resolution =
        state
            .config
            .locales
            .resolve(request.uri().path(), cookie, accept_language);

    match resolution {
        Resolution::Redirect { locale, location } => {
            let location = match request.uri().query() {
                Some(query) => format!("{}?{}", location, query),
                None => location,
            };
            tracing::debug!(
                path = %request.uri().path(),
                %locale,
                location = %location,
                "Redirecting to localized path"
            );
            Redirect::temporary(&location).into_response()
        }
        Resolution::Localized { locale, .. } => {
            request.extensions_mut().insert(RequestLocale(locale));
            let mut response = next.run(request).await;

            let headers = response.headers_mut();
            headers.insert(
                header::CONTENT_LANGUAGE,
                HeaderValue::from_static(locale.as_str()),
            );
            headers.insert(
                header::VARY,
                HeaderValue::from_static("Accept-Language, Cookie"),
            );

            let cookie = Cookie::build((LOCALE_COOKIE, locale.as_str()))
                .path("/")
                .same_site(SameSite::Lax)
                .max_age(time::Duration::seconds(LOCALE_COOKIE_MAX_AGE_SECS));
            (jar.add(cookie), response).into_response()
        }
    }
}
