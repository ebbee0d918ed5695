// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared test helpers: an in-process fake clinic backend and the site app.

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json, Router,
};
use clinic_portal::client::ApiClient;
use clinic_portal::config::Config;
use clinic_portal::i18n::{Catalogs, Locale};
use clinic_portal::routes::create_router;
use clinic_portal::session::{CredentialStore, MemoryCredentialStore};
use clinic_portal::AppState;
use dashmap::DashMap;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Password the fake backend accepts for any username.
#[allow(dead_code)]
pub const PASSWORD: &str = "correct-horse";

/// One request as seen by the fake backend.
#[derive(Debug, Clone)]
#[allow(dead_code)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path below the `/api` root
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

/// Mutable state of the fake backend.
pub struct BackendState {
    /// Access token the protected endpoints accept
    pub valid_access: Mutex<String>,
    /// Refresh token the refresh endpoint accepts
    pub valid_refresh: Mutex<String>,
    /// Issue a new refresh token on every refresh
    pub rotate_refresh: AtomicBool,
    /// Reject every protected request, even with a valid token
    pub reject_all: AtomicBool,
    /// Delay inside the refresh endpoint, to make refreshes overlap
    pub refresh_delay: Mutex<Duration>,
    pub refresh_calls: AtomicUsize,
    issued: AtomicUsize,
    pub requests: Mutex<Vec<RecordedRequest>>,
    /// Hits per path, refresh and login included
    pub hits: DashMap<String, usize>,
    /// Authenticated paths forced to answer with a fixed status
    pub failing: DashMap<String, StatusCode>,
}

impl BackendState {
    fn new() -> Self {
        Self {
            valid_access: Mutex::new("access-0".to_string()),
            valid_refresh: Mutex::new("refresh-0".to_string()),
            rotate_refresh: AtomicBool::new(false),
            reject_all: AtomicBool::new(false),
            refresh_delay: Mutex::new(Duration::ZERO),
            refresh_calls: AtomicUsize::new(0),
            issued: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
            hits: DashMap::new(),
            failing: DashMap::new(),
        }
    }
}

/// Handle on a running fake backend.
#[allow(dead_code)]
pub struct FakeBackend {
    /// API root, e.g. `http://127.0.0.1:41234/api`
    pub base_url: String,
    pub state: Arc<BackendState>,
}

#[allow(dead_code)]
impl FakeBackend {
    pub fn refresh_calls(&self) -> usize {
        self.state.refresh_calls.load(Ordering::SeqCst)
    }

    pub fn hits(&self, path: &str) -> usize {
        self.state.hits.get(path).map(|h| *h).unwrap_or(0)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    /// Requests to `path`, in arrival order.
    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }

    pub fn last_request(&self) -> RecordedRequest {
        self.requests().pop().expect("no requests recorded")
    }

    pub fn set_refresh_delay(&self, delay: Duration) {
        *self.state.refresh_delay.lock().unwrap() = delay;
    }

    pub fn set_rotate_refresh(&self, rotate: bool) {
        self.state.rotate_refresh.store(rotate, Ordering::SeqCst);
    }

    pub fn set_reject_all(&self, reject: bool) {
        self.state.reject_all.store(reject, Ordering::SeqCst);
    }

    /// Make authenticated requests to `path` fail with `status`.
    pub fn fail_path(&self, path: &str, status: StatusCode) {
        self.state.failing.insert(path.to_string(), status);
    }

    pub fn valid_access(&self) -> String {
        self.state.valid_access.lock().unwrap().clone()
    }

    /// Client whose store holds an access token the backend no longer accepts
    /// and the refresh token it does.
    pub fn client_with_stale_access(&self) -> (ApiClient, Arc<MemoryCredentialStore>) {
        let store = Arc::new(MemoryCredentialStore::with_pair("stale-access", "refresh-0"));
        (self.client(store.clone()), store)
    }

    /// Client whose store holds the currently valid pair.
    pub fn client_with_valid_access(&self) -> (ApiClient, Arc<MemoryCredentialStore>) {
        let store = Arc::new(MemoryCredentialStore::with_pair(
            self.valid_access(),
            "refresh-0",
        ));
        (self.client(store.clone()), store)
    }

    pub fn client(&self, store: Arc<dyn CredentialStore>) -> ApiClient {
        ApiClient::new(&self.base_url, store)
    }
}

/// Start a fake backend on an ephemeral port.
#[allow(dead_code)]
pub async fn spawn_backend() -> FakeBackend {
    let state = Arc::new(BackendState::new());
    let app = Router::new().fallback(handle).with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake backend");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake backend");
    });

    FakeBackend {
        base_url: format!("http://{addr}/api"),
        state,
    }
}

async fn handle(State(state): State<Arc<BackendState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let path = parts
        .uri
        .path()
        .strip_prefix("/api")
        .unwrap_or(parts.uri.path())
        .to_string();
    let authorization = parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(body, usize::MAX).await.unwrap_or_default();
    let body: Option<Value> = serde_json::from_slice(&bytes).ok();

    state.requests.lock().unwrap().push(RecordedRequest {
        method: parts.method.clone(),
        path: path.clone(),
        query: parts.uri.query().map(str::to_string),
        authorization: authorization.clone(),
        body: body.clone(),
    });
    *state.hits.entry(path.clone()).or_insert(0) += 1;

    match (parts.method.clone(), path.as_str()) {
        (Method::POST, "/token/") => return login(&state, body),
        (Method::POST, "/token/refresh/") => return refresh(&state, body).await,
        _ => {}
    }

    let expected = format!("Bearer {}", state.valid_access.lock().unwrap());
    if state.reject_all.load(Ordering::SeqCst) || authorization.as_deref() != Some(&expected) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "detail": "Given token not valid for any token type",
                "code": "token_not_valid"
            })),
        )
            .into_response();
    }

    if let Some(status) = state.failing.get(&path).map(|s| *s) {
        return (status, Json(json!({"detail": "Backend unavailable"}))).into_response();
    }

    protected(parts.method, &path, body)
}

fn login(state: &BackendState, body: Option<Value>) -> Response {
    let password = body
        .as_ref()
        .and_then(|b| b["password"].as_str())
        .unwrap_or_default();
    if password != PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "No active account found with the given credentials"})),
        )
            .into_response();
    }

    Json(json!({
        "access": *state.valid_access.lock().unwrap(),
        "refresh": *state.valid_refresh.lock().unwrap(),
    }))
    .into_response()
}

async fn refresh(state: &BackendState, body: Option<Value>) -> Response {
    state.refresh_calls.fetch_add(1, Ordering::SeqCst);
    let delay = *state.refresh_delay.lock().unwrap();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let presented = body
        .as_ref()
        .and_then(|b| b["refresh"].as_str())
        .unwrap_or_default()
        .to_string();
    if presented != *state.valid_refresh.lock().unwrap() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"detail": "Token is invalid or expired", "code": "token_not_valid"})),
        )
            .into_response();
    }

    let n = state.issued.fetch_add(1, Ordering::SeqCst) + 1;
    let access = format!("access-{n}");
    *state.valid_access.lock().unwrap() = access.clone();

    if state.rotate_refresh.load(Ordering::SeqCst) {
        let refresh = format!("refresh-{n}");
        *state.valid_refresh.lock().unwrap() = refresh.clone();
        Json(json!({"access": access, "refresh": refresh})).into_response()
    } else {
        Json(json!({"access": access})).into_response()
    }
}

#[allow(dead_code)]
pub fn doctor_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "full_name": name,
        "phone_number": "+389 70 000 000",
        "email": format!("doctor{id}@example.com"),
        "profile_picture_url": null
    })
}

#[allow(dead_code)]
pub fn appointment_json(id: u64) -> Value {
    json!({
        "id": id,
        "patient_first_name": "Ana",
        "patient_last_name": "Petrova",
        "patient_full_name": "Ana Petrova",
        "patient_phone_number": "070123456",
        "doctor": doctor_json(1, "Tosko Zebekov"),
        "service": {"id": 2, "name": "Cleaning", "price": "1500.00", "duration_minutes": 30},
        "custom_service_name": null,
        "price": "1500.00",
        "duration_minutes": 30,
        "start_datetime": "2025-06-17T09:00:00Z",
        "end_datetime": "2025-06-17T09:30:00Z"
    })
}

fn shift_json(id: u64) -> Value {
    json!({
        "id": id,
        "week_of_year": 25,
        "day_of_week": 0,
        "day_name": "Monday",
        "shift_type": "first",
        "start_time": "08:00:00",
        "end_time": "14:00:00",
        "doctors": [doctor_json(1, "Tosko Zebekov")]
    })
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response()
}

/// Authenticated endpoints.
fn protected(method: Method, path: &str, body: Option<Value>) -> Response {
    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    match (method, segments.as_slice()) {
        (Method::GET, ["doctors"]) => Json(json!([
            doctor_json(1, "Tosko Zebekov"),
            doctor_json(2, "Kire Popcev"),
        ]))
        .into_response(),
        (Method::GET, ["doctors", "404"]) => not_found(),
        (Method::GET, ["doctors", id]) => match id.parse() {
            Ok(id) => Json(doctor_json(id, "Tosko Zebekov")).into_response(),
            Err(_) => not_found(),
        },
        (Method::PUT, ["doctors", id]) => {
            let mut doctor = body.unwrap_or_else(|| json!({}));
            doctor["id"] = json!(id.parse::<u64>().unwrap_or(0));
            Json(doctor).into_response()
        }
        (Method::DELETE, [_, _]) => StatusCode::NO_CONTENT.into_response(),

        (Method::GET, ["services"]) => Json(json!([
            {"id": 2, "name": "Cleaning", "price": "1500.00", "duration_minutes": 30}
        ]))
        .into_response(),
        (Method::POST, ["services"]) => {
            let body = body.unwrap_or_else(|| json!({}));
            if body["name"].as_str().unwrap_or_default().is_empty() {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(json!({"name": ["This field may not be blank."]})),
                )
                    .into_response();
            }
            let mut service = body;
            service["id"] = json!(10);
            (StatusCode::CREATED, Json(service)).into_response()
        }

        (Method::GET, ["shifts"]) => {
            Json(json!([shift_json(1), shift_json(2), shift_json(3)])).into_response()
        }
        (Method::PATCH, ["shifts", id, "update_shift"]) => {
            let mut shift = shift_json(id.parse().unwrap_or(0));
            if let Some(Value::Object(patch)) = body {
                for (key, value) in patch {
                    if key != "doctor_ids" {
                        shift[key] = value;
                    }
                }
            }
            Json(shift).into_response()
        }

        (Method::GET, ["schedule-slots"]) => Json(json!([
            {"id": 5, "doctor": 1, "date": "2025-06-17", "start_time": "09:00:00", "end_time": "09:30:00"}
        ]))
        .into_response(),

        (Method::GET, ["appointments"]) => {
            Json(json!([appointment_json(1), appointment_json(2)])).into_response()
        }
        (Method::GET, ["appointments", "available_slots"]) => {
            Json(json!([["09:00", "09:30"], ["09:30", "10:00"]])).into_response()
        }
        (Method::GET, ["appointments", "calendar"]) => {
            Json(json!({"17": [appointment_json(1)]})).into_response()
        }
        (Method::GET, ["appointments", "week"]) => Json(json!({
            "2025-06-16": [],
            "2025-06-17": [appointment_json(1)]
        }))
        .into_response(),
        (Method::GET, ["appointments", "day"]) => Json(json!([appointment_json(1)])).into_response(),

        (Method::GET, ["calendar"]) => Json(json!({
            "2025-06-16": {
                "date": "2025-06-16",
                "day_name": "Monday",
                "shifts": {
                    "first": {
                        "id": 1,
                        "start_time": "08:00:00",
                        "end_time": "14:00:00",
                        "doctors": [doctor_json(1, "Tosko Zebekov")]
                    },
                    "second": null
                },
                "appointments": [appointment_json(1)]
            }
        }))
        .into_response(),

        (Method::GET, ["broken"]) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
        (Method::GET, ["garbage"]) => (StatusCode::OK, Body::from("not json")).into_response(),

        _ => not_found(),
    }
}

/// Create the site app with test configuration.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let catalogs = Catalogs::embedded(Locale::Mk).expect("embedded catalogs");

    let state = Arc::new(AppState { config, catalogs });

    (create_router(state.clone()), state)
}
