//! # Store Errors
//!
//! Failures reported by a student record store.

use thiserror::Error;

use crate::student::StudentId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Network failure, timeout, or an unexpected backend response
    #[error("Store unavailable: {0}")]
    Transport(String),

    /// Backend rejected the row
    #[error("Store rejected record: {0}")]
    Validation(String),

    /// Update target does not exist
    #[error("Student not found: {0}")]
    NotFound(StudentId),
}

impl StoreError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            StoreError::Transport(_) => 502,
            StoreError::Validation(_) => 422,
            StoreError::NotFound(_) => 404,
        }
    }

    /// Short message suitable for a user-facing notice
    pub fn notice(&self) -> &'static str {
        match self {
            StoreError::Transport(_) => "Student store is unavailable",
            StoreError::Validation(_) => "Student store rejected the record",
            StoreError::NotFound(_) => "Student not found; refresh the list",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(StoreError::Transport("timeout".into()).status_code(), 502);
        assert_eq!(StoreError::Validation("bad".into()).status_code(), 422);
        assert_eq!(StoreError::NotFound(StudentId::new("s-1")).status_code(), 404);
    }

    #[test]
    fn test_notice_hides_transport_detail() {
        let err = StoreError::Transport("connection refused at 10.0.0.3".into());
        assert!(!err.notice().contains("10.0.0.3"));
        assert!(err.to_string().contains("connection refused"));
    }
}
