//! Structured JSON logging
//!
//! - One log line = one event, JSON encoded
//! - `RUST_LOG` overrides the configured filter
//! - Installing twice is harmless; the first subscriber wins

use tracing_subscriber::{fmt, EnvFilter};

/// Builds the filter: `RUST_LOG` if set and valid, else `fallback`, else `info`.
pub fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global JSON subscriber. Returns false if one was already set.
pub fn init_logging(fallback_filter: &str) -> bool {
    fmt()
        .with_env_filter(env_filter(fallback_filter))
        .with_writer(std::io::stderr)
        .json()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_fallback_does_not_panic() {
        let filter = env_filter("[[not a filter");
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn test_second_init_is_refused() {
        init_logging("warn");
        assert!(!init_logging("warn"));
    }
}
