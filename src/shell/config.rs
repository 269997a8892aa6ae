use std::net::{IpAddr, SocketAddr};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";
pub const DEFAULT_OUTBOX_TOPIC: &str = "service-contracts.v1";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("APP_PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("APP_HOST must be an IP address, got {0:?}")]
    InvalidHost(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_filter: String,
    pub outbox_topic: String,
}

impl AppConfig {
    /// Reads `APP_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("APP_HOST") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidHost(raw))?,
            None => DEFAULT_HOST.parse().map_err(|_| ConfigError::InvalidHost(DEFAULT_HOST.into()))?,
        };
        let port = match lookup("APP_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            host,
            port,
            log_filter: lookup("APP_LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.into()),
            outbox_topic: lookup("APP_OUTBOX_TOPIC").unwrap_or_else(|| DEFAULT_OUTBOX_TOPIC.into()),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
