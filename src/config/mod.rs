//! Configuration file
//!
//! A single JSON document, `./rosterdesk.json` by default:
//!
//! ```json
//! {
//!   "backend": { "url": "https://data.example.com", "api_key": "anon_..." },
//!   "http": { "port": 8787 },
//!   "log_filter": "info"
//! }
//! ```
//!
//! Every key except `backend.url` has a default.

mod errors;
mod listen;

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use errors::{ConfigError, ConfigResult};
pub use listen::ListenConfig;

/// Environment variable holding the password used by CLI commands
pub const PASSWORD_ENV: &str = "ROSTERDESK_PASSWORD";

/// Hosted data platform connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the platform (required)
    pub url: String,

    /// Public API key sent as the `apikey` header
    #[serde(default)]
    pub api_key: String,

    /// Table holding student rows (default: "students")
    #[serde(default = "default_table")]
    pub table: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_table() -> String {
    "students".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl BackendConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: String::new(),
            table: default_table(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Absolute URL for a path below the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds a reqwest client with the configured timeout
    pub fn http_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder().timeout(self.timeout()).build()
    }

    fn validate(&self) -> ConfigResult<()> {
        if !(self.url.starts_with("http://") || self.url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "backend.url",
                format!("'{}' must start with http:// or https://", self.url),
            ));
        }
        if self.table.trim().is_empty() {
            return Err(ConfigError::invalid("backend.table", "must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("backend.timeout_secs", "must be > 0"));
        }
        Ok(())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    pub backend: BackendConfig,

    #[serde(default)]
    pub http: ListenConfig,

    /// `tracing` filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl DeskConfig {
    pub fn new(backend: BackendConfig) -> Self {
        Self {
            backend,
            http: ListenConfig::default(),
            log_filter: default_log_filter(),
        }
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parse and validate configuration text
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: DeskConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> ConfigResult<()> {
        self.backend.validate()?;
        self.http.validate()
    }
}
