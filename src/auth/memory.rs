//! In-memory auth provider for testing and offline use

use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::errors::{AuthError, AuthResult};
use super::provider::AuthProvider;
use super::session::{Session, SessionCell, UserRef};

#[derive(Debug, Clone)]
struct Account {
    user: UserRef,
    password: String,
}

/// Auth provider backed by a list of registered accounts.
///
/// Passwords are compared in plain text; never use outside tests and demos.
#[derive(Debug, Default)]
pub struct InMemoryAuthProvider {
    accounts: RwLock<Vec<Account>>,
    session: SessionCell,
}

impl InMemoryAuthProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shares an existing session slot
    pub fn with_session(session: SessionCell) -> Self {
        Self {
            accounts: RwLock::default(),
            session,
        }
    }

    /// Registers an account and returns its user reference
    pub fn register(&self, email: &str, password: &str) -> AuthResult<UserRef> {
        let mut accounts = self
            .accounts
            .write()
            .map_err(|_| AuthError::Transport("Lock poisoned".to_string()))?;
        if let Some(existing) = accounts.iter().find(|a| a.user.email == email) {
            return Ok(existing.user.clone());
        }
        let user = UserRef::new(Uuid::new_v4().to_string(), email);
        accounts.push(Account {
            user: user.clone(),
            password: password.to_string(),
        });
        Ok(user)
    }

    pub fn session(&self) -> &SessionCell {
        &self.session
    }
}

#[async_trait]
impl AuthProvider for InMemoryAuthProvider {
    fn current_user(&self) -> Option<UserRef> {
        self.session.user()
    }

    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<UserRef> {
        let user = {
            let accounts = self
                .accounts
                .read()
                .map_err(|_| AuthError::Transport("Lock poisoned".to_string()))?;
            accounts
                .iter()
                .find(|a| a.user.email == email && a.password == password)
                .map(|a| a.user.clone())
                .ok_or(AuthError::InvalidCredentials)?
        };

        let token = Uuid::new_v4().to_string();
        self.session
            .set(Session::new(user.clone(), format!("access-{token}"), format!("refresh-{token}")));
        Ok(user)
    }

    async fn sign_out(&self) -> AuthResult<()> {
        self.session.take();
        Ok(())
    }
}
