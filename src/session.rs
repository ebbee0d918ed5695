// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Credential storage for the admin API client.
//!
//! The access/refresh token pair lives behind [`CredentialStore`] so the
//! client never reads ambient state. Two stores are provided:
//! - [`MemoryCredentialStore`] for short-lived sessions and tests
//! - [`FileCredentialStore`] which persists the pair as a small JSON file

use crate::models::TokenPair;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Errors raised by credential stores.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Credential file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Credential file is malformed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Credential store lock poisoned")]
    Poisoned,
}

impl<T> From<PoisonError<T>> for SessionError {
    fn from(_: PoisonError<T>) -> Self {
        SessionError::Poisoned
    }
}

/// Storage for the access and refresh credentials.
///
/// Implementations are shared between every clone of an
/// [`ApiClient`](crate::client::ApiClient), so they must be thread-safe.
pub trait CredentialStore: Send + Sync {
    /// Current access credential, if any.
    fn get_access(&self) -> Result<Option<String>, SessionError>;

    /// Current refresh credential, if any.
    fn get_refresh(&self) -> Result<Option<String>, SessionError>;

    /// Replace the access credential (after a refresh).
    fn set_access(&self, access: &str) -> Result<(), SessionError>;

    /// Replace the refresh credential (rotation).
    fn set_refresh(&self, refresh: &str) -> Result<(), SessionError>;

    /// Store a fresh pair (after login).
    fn set_pair(&self, pair: &TokenPair) -> Result<(), SessionError> {
        self.set_access(&pair.access)?;
        self.set_refresh(&pair.refresh)
    }

    /// Remove both credentials.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Both credentials as stored on disk and in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredentials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

// ─── In-memory store ─────────────────────────────────────────────────────────

/// Credentials held in process memory only.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    inner: Mutex<StoredCredentials>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store already holding a pair.
    pub fn with_pair(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            inner: Mutex::new(StoredCredentials {
                access_token: Some(access.into()),
                refresh_token: Some(refresh.into()),
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoredCredentials>, SessionError> {
        Ok(self.inner.lock()?)
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get_access(&self) -> Result<Option<String>, SessionError> {
        Ok(self.lock()?.access_token.clone())
    }

    fn get_refresh(&self) -> Result<Option<String>, SessionError> {
        Ok(self.lock()?.refresh_token.clone())
    }

    fn set_access(&self, access: &str) -> Result<(), SessionError> {
        self.lock()?.access_token = Some(access.to_string());
        Ok(())
    }

    fn set_refresh(&self, refresh: &str) -> Result<(), SessionError> {
        self.lock()?.refresh_token = Some(refresh.to_string());
        Ok(())
    }

    fn set_pair(&self, pair: &TokenPair) -> Result<(), SessionError> {
        let mut creds = self.lock()?;
        creds.access_token = Some(pair.access.clone());
        creds.refresh_token = Some(pair.refresh.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.lock()? = StoredCredentials::default();
        Ok(())
    }
}

// ─── File-backed store ───────────────────────────────────────────────────────

/// Credentials persisted to a JSON file (`{"access_token", "refresh_token"}`).
///
/// Every read goes to disk so that separate processes sharing the file see
/// each other's updates. Writes are whole-file replacements.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<StoredCredentials, SessionError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(StoredCredentials::default()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoredCredentials::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Write to a private (0600) temp file beside the target, then rename it
    /// into place so readers never observe a partially written file.
    fn save(&self, creds: &StoredCredentials) -> Result<(), SessionError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir)?;

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(&serde_json::to_vec_pretty(creds)?)?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn update(&self, f: impl FnOnce(&mut StoredCredentials)) -> Result<(), SessionError> {
        let _guard = self.write_lock.lock()?;
        let mut creds = self.load()?;
        f(&mut creds);
        self.save(&creds)
    }
}

impl CredentialStore for FileCredentialStore {
    fn get_access(&self) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.access_token)
    }

    fn get_refresh(&self) -> Result<Option<String>, SessionError> {
        Ok(self.load()?.refresh_token)
    }

    fn set_access(&self, access: &str) -> Result<(), SessionError> {
        self.update(|creds| creds.access_token = Some(access.to_string()))
    }

    fn set_refresh(&self, refresh: &str) -> Result<(), SessionError> {
        self.update(|creds| creds.refresh_token = Some(refresh.to_string()))
    }

    fn set_pair(&self, pair: &TokenPair) -> Result<(), SessionError> {
        self.update(|creds| {
            creds.access_token = Some(pair.access.clone());
            creds.refresh_token = Some(pair.refresh.clone());
        })
    }

    fn clear(&self) -> Result<(), SessionError> {
        let _guard = self.write_lock.lock()?;
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
