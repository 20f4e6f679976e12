//! # Session
//!
//! The signed-in user and their tokens, shared between the auth provider
//! (which writes it) and the record store (which reads the bearer token).

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Owner reference: the authenticated user stamped on inserted records
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub email: String,
}

impl UserRef {
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
        }
    }
}

/// An authenticated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserRef,
    pub access_token: String,
    pub refresh_token: String,
    /// When the access token stops being accepted; `None` if unknown
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn new(user: UserRef, access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            user,
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at: None,
        }
    }

    /// Sets the expiry `expires_in` seconds after `now`
    pub fn expiring_in(mut self, expires_in: u64, now: DateTime<Utc>) -> Self {
        let secs = i64::try_from(expires_in).unwrap_or(i64::MAX);
        self.expires_at = Duration::try_seconds(secs).and_then(|d| now.checked_add_signed(d));
        self
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// Shared, lock-protected slot for the current session
#[derive(Debug, Clone, Default)]
pub struct SessionCell {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionCell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session, if any and not expired
    pub fn current(&self) -> Option<Session> {
        let guard = match self.inner.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard
            .as_ref()
            .filter(|s| !s.is_expired(Utc::now()))
            .cloned()
    }

    pub fn user(&self) -> Option<UserRef> {
        self.current().map(|s| s.user)
    }

    /// Bearer token for store requests
    pub fn access_token(&self) -> Option<String> {
        self.current().map(|s| s.access_token)
    }

    pub fn set(&self, session: Session) {
        *self.write() = Some(session);
    }

    /// Clears the slot and returns what was there
    pub fn take(&self) -> Option<Session> {
        self.write().take()
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        match self.inner.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}
