//! Reqwest-backed auth provider.
//!
//! Talks to the data platform's auth endpoints:
//! - `POST /auth/login` `{email, password}` -> `{user, access_token, refresh_token, expires_in}`
//! - `POST /auth/logout` `{refresh_token}`

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::errors::{AuthError, AuthResult};
use super::provider::AuthProvider;
use super::session::{Session, SessionCell, UserRef};
use crate::config::BackendConfig;
use crate::observability::Event;

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LogoutRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginUser {
    id: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    user: LoginUser,
    access_token: String,
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Auth provider that signs in against the hosted platform
pub struct RestAuthProvider {
    client: Client,
    config: BackendConfig,
    session: SessionCell,
}

impl RestAuthProvider {
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(config: &BackendConfig, session: SessionCell) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: config.http_client()?,
            config: config.clone(),
            session,
        })
    }

    /// The session slot this provider writes to
    pub fn session(&self) -> &SessionCell {
        &self.session
    }
}

#[async_trait]
impl AuthProvider for RestAuthProvider {
    fn current_user(&self) -> Option<UserRef> {
        self.session.user()
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<UserRef> {
        let response = self
            .client
            .post(self.config.endpoint("auth/login"))
            .header("apikey", self.config.api_key.as_str())
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        let status = response.status();
        if matches!(status, StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            warn!(event = %Event::SignInRejected, status = status.as_u16(), "sign-in rejected");
            return Err(AuthError::InvalidCredentials);
        }
        if !status.is_success() {
            return Err(AuthError::Transport(format!("unexpected status {status}")));
        }

        let body: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::Transport(format!("malformed login response: {e}")))?;

        let user = UserRef::new(body.user.id, body.user.email);
        let mut session = Session::new(user.clone(), body.access_token, body.refresh_token);
        if let Some(expires_in) = body.expires_in {
            session = session.expiring_in(expires_in, Utc::now());
        }
        self.session.set(session);

        info!(event = %Event::SignIn, user_id = %user.id, "signed in");
        Ok(user)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        let Some(session) = self.session.take() else {
            return Ok(());
        };
        info!(event = %Event::SignOut, user_id = %session.user.id, "signed out");

        let response = self
            .client
            .post(self.config.endpoint("auth/logout"))
            .header("apikey", self.config.api_key.as_str())
            .bearer_auth(&session.access_token)
            .json(&LogoutRequest {
                refresh_token: &session.refresh_token,
            })
            .send()
            .await
            .map_err(|e| AuthError::Transport(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AuthError::Transport(format!(
                "logout failed with status {}",
                response.status()
            )))
        }
    }
}
