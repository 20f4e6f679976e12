//! # Auth Provider
//!
//! The dashboard only needs to know who is signed in (to gate views and
//! stamp ownership on inserts) and to sign in and out.

use async_trait::async_trait;

use super::errors::AuthResult;
use super::session::UserRef;

/// Authentication provider
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// The signed-in user, if any
    fn current_user(&self) -> Option<UserRef>;

    /// Authenticates with email and password and starts a session
    async fn sign_in(&self, email: &str, password: &str) -> AuthResult<UserRef>;

    /// Ends the current session. Signing out with no session is a no-op.
    async fn sign_out(&self) -> AuthResult<()>;
}
