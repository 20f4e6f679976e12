//! # Dashboard Errors
//!
//! Everything a dashboard action can fail with. Each error maps to an HTTP
//! status and to the notice the user sees.

use thiserror::Error;

use super::notice::{Notice, FETCH_FAILED, SAVE_FAILED};
use crate::auth::AuthError;
use crate::roster::RosterError;
use crate::store::StoreError;
use crate::student::ValidationErrors;

/// Result type for dashboard actions
pub type DashboardResult<T> = Result<T, DashboardError>;

#[derive(Debug, Clone, Error)]
pub enum DashboardError {
    /// No signed-in user
    #[error("Authentication required")]
    AuthenticationRequired,

    /// Form failed validation; nothing was sent to the store
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Another submission is still running
    #[error("A submission is already in progress")]
    SubmitInFlight,

    /// Reading the collection failed
    #[error("Fetch failed: {0}")]
    Fetch(StoreError),

    /// Insert or update failed
    #[error("Save failed: {0}")]
    Save(StoreError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Roster(#[from] RosterError),
}

impl DashboardError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            DashboardError::AuthenticationRequired => 401,
            DashboardError::Validation(_) => 422,
            DashboardError::SubmitInFlight => 409,
            DashboardError::Fetch(e) | DashboardError::Save(e) => e.status_code(),
            DashboardError::Auth(e) => e.status_code(),
            DashboardError::Roster(e) => e.status_code(),
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    /// The error notice shown to the user
    pub fn notice(&self) -> Notice {
        match self {
            DashboardError::AuthenticationRequired => Notice::error("Please sign in to continue"),
            DashboardError::Validation(_) => Notice::error("Please fix the highlighted fields"),
            DashboardError::SubmitInFlight => Notice::error("Already saving; please wait"),
            DashboardError::Fetch(e @ StoreError::NotFound(_))
            | DashboardError::Save(e @ StoreError::NotFound(_)) => Notice::error(e.notice()),
            DashboardError::Fetch(_) => Notice::error(FETCH_FAILED),
            DashboardError::Save(_) => Notice::error(SAVE_FAILED),
            DashboardError::Auth(AuthError::InvalidCredentials) => {
                Notice::error("Invalid email or password")
            }
            DashboardError::Auth(_) => Notice::error("Sign-in service is unavailable"),
            DashboardError::Roster(e) => Notice::error(e.to_string()),
        }
    }
}

impl From<ValidationErrors> for DashboardError {
    fn from(errors: ValidationErrors) -> Self {
        DashboardError::Validation(errors)
    }
}
