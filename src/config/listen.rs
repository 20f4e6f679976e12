//! Where the dashboard API listens, and which browser origins may call it.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::errors::{ConfigError, ConfigResult};

/// `http` section of the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListenConfig {
    /// Interface address; loopback unless the UI is served from elsewhere
    #[serde(default = "default_host")]
    pub host: IpAddr,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Origins allowed by CORS, e.g. `http://localhost:5173`.
    /// Empty allows any origin.
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

fn default_host() -> IpAddr {
    IpAddr::V4(Ipv4Addr::LOCALHOST)
}

fn default_port() -> u16 {
    8787
}

fn default_cors_origins() -> Vec<String> {
    vec![
        "http://localhost:5173".to_string(),
        "http://127.0.0.1:5173".to_string(),
    ]
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

impl ListenConfig {
    /// Loopback on `port`, default origins
    pub fn local(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub(super) fn validate(&self) -> ConfigResult<()> {
        if self.port == 0 {
            return Err(ConfigError::invalid("http.port", "must be > 0"));
        }
        for origin in &self.cors_origins {
            let url = Url::parse(origin).map_err(|e| {
                ConfigError::invalid("http.cors_origins", format!("'{origin}': {e}"))
            })?;
            if !matches!(url.scheme(), "http" | "https") || url.path() != "/" {
                return Err(ConfigError::invalid(
                    "http.cors_origins",
                    format!("'{origin}' must be a bare http(s) origin"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_loopback() {
        let config = ListenConfig::default();
        assert!(config.host.is_loopback());
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8787");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_host_parses_as_ip() {
        let config: ListenConfig = serde_json::from_str(r#"{"host": "0.0.0.0", "port": 9000}"#).unwrap();
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9000");
        assert!(serde_json::from_str::<ListenConfig>(r#"{"host": "localhost"}"#).is_err());
    }

    #[test]
    fn test_rejects_port_zero() {
        assert!(matches!(
            ListenConfig::local(0).validate(),
            Err(ConfigError::Invalid { key: "http.port", .. })
        ));
    }

    #[test]
    fn test_rejects_unusable_origins() {
        for origin in ["localhost:5173", "ftp://files.example.com", "http://app.example.com/ui"] {
            let config = ListenConfig {
                cors_origins: vec![origin.to_string()],
                ..Default::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Invalid { key: "http.cors_origins", .. })),
                "{origin} should be rejected"
            );
        }
    }
}
