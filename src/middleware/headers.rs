// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response headers shared by every public site response.

use axum::{
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
};

/// Page documents only change on deploy; let browsers and the CDN keep them
/// for five minutes.
const PAGE_CACHE_CONTROL: &str = "public, max-age=300";

/// Add security and caching headers.
///
/// Successful GET responses are cacheable unless the handler already chose a
/// `Cache-Control`; everything else (redirects, errors, form posts) is not.
pub async fn add_site_headers(req: Request, next: Next) -> Response {
    let cacheable = req.method() == Method::GET;
    let mut response = next.run(req).await;
    let success = response.status().is_success();
    let headers = response.headers_mut();

    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN"));
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    if !headers.contains_key(header::CACHE_CONTROL) {
        let value = if cacheable && success {
            PAGE_CACHE_CONTROL
        } else {
            "no-store"
        };
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(value));
    }

    response
}
