// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Authenticated client for the clinic backend API.
//!
//! Handles:
//! - Bearer credential attachment from the injected [`CredentialStore`]
//! - One transparent refresh-and-retry when a request gets a 401
//! - Coalescing of concurrent refreshes into a single refresh call
//! - Mapping error bodies into [`ApiError`]

pub mod error;

pub use error::ApiError;

use crate::config::Config;
use crate::models::{LoginCredentials, RefreshRequest, RefreshResponse, TokenPair};
use crate::session::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Path of the token-issue endpoint, relative to the base URL.
pub const TOKEN_PATH: &str = "/token/";

/// Path of the token-refresh endpoint, relative to the base URL.
pub const TOKEN_REFRESH_PATH: &str = "/token/refresh/";

/// One logical backend call.
///
/// The `retried` flag is set once the request has been re-issued after a
/// refresh; a request with the flag set is never refreshed again.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: Option<serde_json::Value>,
    retried: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Add a query parameter.
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach a JSON body. The body is serialized once and reused on retry.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let value =
            serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_retried(&self) -> bool {
        self.retried
    }
}

/// Outcome of entering the refresh section.
enum Renewal {
    /// A usable access credential is in the store (ours or a concurrent one).
    Renewed,
    /// No refresh credential was stored; the store has been cleared.
    MissingRefresh,
}

/// Client for the clinic backend.
///
/// Cheap to clone: clones share the HTTP connection pool, the credential
/// store and the refresh lock.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn CredentialStore>,
    /// Serializes refresh attempts across every clone of this client.
    refresh_lock: Arc<Mutex<()>>,
}

impl ApiClient {
    /// Create a client for `base_url` (e.g. `http://127.0.0.1:8000/api`).
    pub fn new(base_url: impl Into<String>, store: Arc<dyn CredentialStore>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, store)
    }

    /// Create a client with a request timeout applied to every call.
    pub fn with_timeout(
        base_url: impl Into<String>,
        store: Arc<dyn CredentialStore>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Network)?;
        Ok(Self::with_http(http, base_url, store))
    }

    /// Create a client from configuration: file-backed credentials when
    /// `credentials_path` is set, in-memory otherwise.
    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        let store: Arc<dyn CredentialStore> = match &config.credentials_path {
            Some(path) => Arc::new(FileCredentialStore::new(path)),
            None => Arc::new(MemoryCredentialStore::new()),
        };
        Self::with_timeout(&config.api_base_url, store, config.api_timeout)
    }

    /// Create a client around an existing `reqwest::Client`.
    pub fn with_http(
        http: reqwest::Client,
        base_url: impl Into<String>,
        store: Arc<dyn CredentialStore>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            store,
            refresh_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    // ─── Session ─────────────────────────────────────────────────────────────

    /// Exchange username/password for a token pair and store it.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), ApiError> {
        let response = self
            .http
            .post(self.url(TOKEN_PATH))
            .json(credentials)
            .send()
            .await
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            let err = ApiError::from_response(response).await;
            tracing::warn!(username = %credentials.username, error = %err, "Login rejected");
            return Err(err);
        }

        let pair: TokenPair = decode(response).await?;
        self.store.set_pair(&pair)?;
        tracing::info!(username = %credentials.username, "Logged in");
        Ok(())
    }

    /// Forget both credentials.
    pub fn logout(&self) -> Result<(), ApiError> {
        self.store.clear()?;
        tracing::info!("Logged out, credentials cleared");
        Ok(())
    }

    /// Whether an access credential is currently stored.
    pub fn is_authenticated(&self) -> Result<bool, ApiError> {
        Ok(self.store.get_access()?.is_some())
    }

    // ─── Requests ────────────────────────────────────────────────────────────

    /// Issue a request, transparently refreshing once on 401.
    ///
    /// Returns the successful response, or the final error:
    /// - non-401 failures propagate unchanged, without refresh
    /// - a 401 with no refresh credential clears the store and propagates
    /// - a failed refresh clears the store and yields [`ApiError::AuthExpired`]
    /// - a 401 on the retried request propagates as [`ApiError::Unauthorized`]
    pub async fn execute(&self, mut request: ApiRequest) -> Result<reqwest::Response, ApiError> {
        loop {
            let access = self.store.get_access()?;
            let response = self.dispatch(&request, access.as_deref()).await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response);
            }

            if status != StatusCode::UNAUTHORIZED || request.retried {
                let err = ApiError::from_response(response).await;
                tracing::debug!(
                    method = %request.method,
                    path = %request.path,
                    status = status.as_u16(),
                    retried = request.retried,
                    "Backend request failed"
                );
                return Err(err);
            }

            let original = ApiError::from_response(response).await;
            request.retried = true;

            match self.renew_access(access.as_deref()).await? {
                Renewal::Renewed => {
                    tracing::debug!(
                        method = %request.method,
                        path = %request.path,
                        "Retrying request with renewed access token"
                    );
                }
                Renewal::MissingRefresh => return Err(original),
            }
        }
    }

    /// GET and decode JSON.
    pub async fn get_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let response = self.execute(request).await?;
        decode(response).await
    }

    /// Send a request with a JSON body and decode the JSON response.
    pub async fn send_json<B, T>(
        &self,
        method: Method,
        path: impl Into<String>,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = ApiRequest::new(method, path).json(body)?;
        let response = self.execute(request).await?;
        decode(response).await
    }

    /// DELETE, ignoring any response body.
    pub async fn delete(&self, path: impl Into<String>) -> Result<(), ApiError> {
        self.execute(ApiRequest::delete(path)).await?;
        Ok(())
    }

    async fn dispatch(
        &self,
        request: &ApiRequest,
        access: Option<&str>,
    ) -> Result<reqwest::Response, ApiError> {
        let mut builder = self
            .http
            .request(request.method.clone(), self.url(&request.path));

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = access {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        builder.send().await.map_err(|e| {
            tracing::warn!(
                method = %request.method,
                path = %request.path,
                error = %e,
                "Backend request did not complete"
            );
            ApiError::Network(e)
        })
    }

    // ─── Token refresh ───────────────────────────────────────────────────────

    /// Obtain a new access credential after `stale` was rejected.
    ///
    /// 1. Acquire the refresh lock (one refresh at a time)
    /// 2. Re-check the store: if the access credential changed while we
    ///    waited, a concurrent caller already refreshed and we reuse theirs
    /// 3. Otherwise exchange the refresh credential
    /// 4. On failure clear the store and report [`ApiError::AuthExpired`]
    async fn renew_access(&self, stale: Option<&str>) -> Result<Renewal, ApiError> {
        let _guard = self.refresh_lock.lock().await;

        let current = self.store.get_access()?;
        if current.is_some() && current.as_deref() != stale {
            tracing::debug!("Access token already renewed by a concurrent request");
            return Ok(Renewal::Renewed);
        }

        let Some(refresh) = self.store.get_refresh()? else {
            tracing::info!("Access token rejected and no refresh token stored");
            self.store.clear()?;
            return Ok(Renewal::MissingRefresh);
        };

        match self.refresh_call(&refresh).await {
            Ok(tokens) => {
                self.store.set_access(&tokens.access)?;
                if let Some(rotated) = &tokens.refresh {
                    self.store.set_refresh(rotated)?;
                }
                tracing::info!(rotated = tokens.refresh.is_some(), "Access token refreshed");
                Ok(Renewal::Renewed)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Token refresh failed, clearing credentials");
                self.store.clear()?;
                Err(ApiError::AuthExpired(e.to_string()))
            }
        }
    }

    /// Dedicated refresh call; carries no bearer header and is never retried.
    async fn refresh_call(&self, refresh: &str) -> Result<RefreshResponse, ApiError> {
        let response = self
            .http
            .post(self.url(TOKEN_REFRESH_PATH))
            .json(&RefreshRequest { refresh })
            .send()
            .await
            .map_err(ApiError::Network)?;

        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }

        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }
}

/// Decode a success body as JSON.
async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await.map_err(ApiError::Network)?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
