//! API server configuration from environment variables

use std::{env, net::SocketAddr};

use thiserror::Error;

mod defaults {
    pub const API_PORT: &str = "8080";
    pub const API_HOST: &str = "0.0.0.0";
    pub const LOG_FILTER: &str = "api=debug,tower_http=debug";
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API_PORT: `{0}`")]
    InvalidPort(String),

    #[error("Invalid listen address: `{0}`")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    /// Fallback tracing filter when RUST_LOG is not set
    pub log_filter: String,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_port = lookup("API_PORT").unwrap_or_else(|| defaults::API_PORT.to_string());
        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort(raw_port.clone()))?;

        Ok(Self {
            host: lookup("API_HOST").unwrap_or_else(|| defaults::API_HOST.to_string()),
            port,
            log_filter: defaults::LOG_FILTER.to_string(),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse().map_err(|_| ConfigError::InvalidAddress(addr))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.socket_addr().unwrap().port(), 8080);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[("API_HOST", "127.0.0.1"), ("API_PORT", "3001")]).unwrap();

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:3001");
    }

    #[test]
    fn test_invalid_values_are_reported() {
        assert_eq!(
            config_from(&[("API_PORT", "eighty")]),
            Err(ConfigError::InvalidPort("eighty".to_string()))
        );

        let config = config_from(&[("API_HOST", "not a host")]).unwrap();
        assert_eq!(
            config.socket_addr(),
            Err(ConfigError::InvalidAddress("not a host:8080".to_string()))
        );
    }
}
