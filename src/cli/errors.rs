//! CLI-specific error types
//!
//! Every CLI error is fatal: it is printed as a JSON error line and the
//! process exits non-zero.

use std::fmt;
use std::io;

use serde_json::Value;

use crate::config::ConfigError;
use crate::dashboard::DashboardError;
use crate::roster::RosterError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout)
    IoError,
    /// Missing credentials or sign-in refused
    AuthFailed,
    /// Bad flag or input value
    InvalidInput,
    /// Form failed validation
    ValidationFailed,
    /// Store or dashboard action failed
    RequestFailed,
    /// Server or runtime could not start
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "ROSTERDESK_CLI_CONFIG_ERROR",
            Self::IoError => "ROSTERDESK_CLI_IO_ERROR",
            Self::AuthFailed => "ROSTERDESK_CLI_AUTH_FAILED",
            Self::InvalidInput => "ROSTERDESK_CLI_INVALID_INPUT",
            Self::ValidationFailed => "ROSTERDESK_CLI_VALIDATION_FAILED",
            Self::RequestFailed => "ROSTERDESK_CLI_REQUEST_FAILED",
            Self::BootFailed => "ROSTERDESK_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
    details: Option<Value>,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn auth_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::AuthFailed, msg)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Structured detail (field errors) printed alongside the message
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

impl From<RosterError> for CliError {
    fn from(e: RosterError) -> Self {
        Self::invalid_input(e.to_string())
    }
}

impl From<DashboardError> for CliError {
    fn from(e: DashboardError) -> Self {
        match e {
            DashboardError::Validation(errors) => Self {
                code: CliErrorCode::ValidationFailed,
                message: errors.to_string(),
                details: serde_json::to_value(&errors).ok(),
            },
            DashboardError::AuthenticationRequired | DashboardError::Auth(_) => {
                Self::auth_failed(e.to_string())
            }
            DashboardError::Roster(e) => e.into(),
            other => Self::new(CliErrorCode::RequestFailed, other.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
