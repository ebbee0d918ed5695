// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Public site routing: locale redirects, page documents and the contact form.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use serde_json::{json, Value};
use tower::ServiceExt;

mod common;

async fn get(uri: &str, headers: &[(header::HeaderName, &str)]) -> Response {
    let (app, _) = common::create_test_app();
    let mut builder = Request::builder().uri(uri);
    for (name, value) in headers {
        builder = builder.header(name, *value);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_json(uri: &str, body: Value) -> Response {
    let (app, _) = common::create_test_app();
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn body_json(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1 << 20)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
}

fn set_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .find(|v| v.starts_with("NEXT_LOCALE="))
}

#[tokio::test]
async fn test_health_check() {
    let response = get("/health", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::CONTENT_LANGUAGE).is_none());

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_root_redirects_to_default_locale() {
    let response = get("/", &[]).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/mk");
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
}

#[tokio::test]
async fn test_unprefixed_path_keeps_path_and_query() {
    let response = get("/about?ref=ad", &[]).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/mk/about?ref=ad");
}

#[tokio::test]
async fn test_cookie_beats_accept_language() {
    let response = get(
        "/contact",
        &[
            (header::COOKIE, "NEXT_LOCALE=bg"),
            (header::ACCEPT_LANGUAGE, "en-US,en;q=0.9"),
        ],
    )
    .await;
    assert_eq!(location(&response), "/bg/contact");
}

#[tokio::test]
async fn test_unsupported_cookie_falls_through_to_accept_language() {
    let response = get(
        "/",
        &[
            (header::COOKIE, "NEXT_LOCALE=de"),
            (header::ACCEPT_LANGUAGE, "de-DE,en-GB;q=0.8,mk;q=0.5"),
        ],
    )
    .await;
    assert_eq!(location(&response), "/en");
}

#[tokio::test]
async fn test_accept_language_without_match_uses_default() {
    let response = get("/services", &[(header::ACCEPT_LANGUAGE, "fr-FR,de;q=0.7")]).await;
    assert_eq!(location(&response), "/mk/services");
}

#[tokio::test]
async fn test_localized_page_document() {
    let response = get("/en/about", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_LANGUAGE).unwrap(),
        "en"
    );
    assert!(response
        .headers()
        .get_all(header::VARY)
        .iter()
        .any(|v| v == "Accept-Language, Cookie"));
    assert_eq!(
        response.headers().get(header::X_CONTENT_TYPE_OPTIONS).unwrap(),
        "nosniff"
    );

    let cookie = set_cookie(&response).expect("locale cookie");
    assert!(cookie.starts_with("NEXT_LOCALE=en"));
    assert!(cookie.contains("Path=/"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Max-Age=31536000"));

    let doc = body_json(response).await;
    assert_eq!(doc["locale"], "en");
    assert_eq!(doc["page"], "about");
    assert_eq!(doc["layout"]["nav"]["about"], "About us");
    assert_eq!(doc["layout"]["meta"]["title"], "Dental Center Zebekov");
    assert!(doc["messages"]["about"].is_object());
    assert!(doc["messages"]["team"]["members"]["toskoZebekov"].is_object());
    assert_eq!(doc["data"]["team"].as_array().unwrap().len(), 9);

    let alternates: Vec<(String, String)> = doc["alternates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| {
            (
                a["locale"].as_str().unwrap().to_string(),
                a["href"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(
        alternates,
        vec![
            ("mk".to_string(), "/mk/about".to_string()),
            ("en".to_string(), "/en/about".to_string()),
            ("bg".to_string(), "/bg/about".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_locale_prefix_root_is_home() {
    let response = get("/bg", &[(header::COOKIE, "NEXT_LOCALE=en")]).await;
    assert_eq!(response.status(), StatusCode::OK);

    // Explicit prefix wins over the cookie, and the cookie follows it
    assert_eq!(set_cookie(&response).unwrap().split(';').next(), Some("NEXT_LOCALE=bg"));

    let doc = body_json(response).await;
    assert_eq!(doc["page"], "home");
    assert_eq!(doc["layout"]["nav"]["home"], "Начало");
    assert_eq!(doc["data"]["stats"][2], json!({"key": "doctors", "value": 9}));
    assert_eq!(doc["data"]["services"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_contact_and_locations_data() {
    let response = get("/mk/locations", &[]).await;
    let doc = body_json(response).await;
    assert_eq!(doc["data"]["locations"][0]["key"], "strumica");
    assert_eq!(doc["data"]["locations"][1]["phone"], "+389 71 393 199");

    let response = get("/en/contact", &[]).await;
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=300"
    );
    let doc = body_json(response).await;
    assert_eq!(doc["page"], "contact");
    assert_eq!(doc["data"]["workingHours"][2]["hours"], Value::Null);
    assert!(doc["messages"]["contact"]["form"]["submit"].is_string());
}

#[tokio::test]
async fn test_messages_endpoint_returns_catalog() {
    let response = get("/mk/messages", &[]).await;
    assert_eq!(response.status(), StatusCode::OK);
    let catalog = body_json(response).await;
    assert_eq!(catalog["nav"]["contact"], "Контакт");
    assert!(catalog["services"]["items"]["implants"].is_object());
}

#[tokio::test]
async fn test_unknown_page_is_localized_404() {
    let response = get("/en/does-not-exist", &[]).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );

    let body = body_json(response).await;
    assert_eq!(body["error"], "not_found");
    assert_eq!(
        body["details"],
        "The page you are looking for does not exist."
    );
}

#[tokio::test]
async fn test_unsupported_prefix_is_treated_as_a_path() {
    let response = get("/de/about", &[]).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(location(&response), "/mk/de/about");
}

#[tokio::test]
async fn test_contact_form_accepted() {
    let response = post_json(
        "/en/contact",
        json!({
            "name": "  Ana Petrova ",
            "email": "ana@example.com",
            "message": "I would like a check-up next week."
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Thank you, Ana Petrova! We will contact you soon."
    );
}

#[tokio::test]
async fn test_contact_form_rejected_with_fields() {
    let response = post_json(
        "/mk/contact",
        json!({
            "name": "A",
            "email": "not-an-email",
            "phone": "070 123 456",
            "message": "Hi"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"], "Ве молиме проверете ги означените полиња.");
    assert_eq!(body["fields"], json!(["email", "message", "name"]));
}

#[tokio::test]
async fn test_contact_form_blank_phone_is_optional() {
    let response = post_json(
        "/en/contact",
        json!({
            "name": "Ana Petrova",
            "email": "ana@example.com",
            "phone": "  ",
            "message": "I would like an appointment please."
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_contact_form_empty_phone_string() {
    let response = post_json(
        "/en/contact",
        json!({
            "name": "Ana Petrova",
            "email": "ana@example.com",
            "phone": "",
            "message": "I would like an appointment please."
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_contact_form_missing_field_is_localized_json() {
    let response = post_json(
        "/mk/contact",
        json!({"name": "Ana Petrova", "email": "ana@example.com"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/json"));
    let body = body_json(response).await;
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"], "Ве молиме проверете ги означените полиња.");
}

#[tokio::test]
async fn test_contact_form_malformed_json() {
    let (app, _) = common::create_test_app();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/en/contact")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{\"name\": "))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "bad_request");
    assert_eq!(body["details"], "Please check the highlighted fields.");
}
