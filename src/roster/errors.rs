//! Roster error types

use thiserror::Error;

/// Result type for roster parsing
pub type RosterResult<T> = Result<T, RosterError>;

/// Errors raised while parsing listing parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Column name that is not a sortable student field
    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    /// Direction other than asc/desc
    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),
}

impl RosterError {
    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        400
    }
}
