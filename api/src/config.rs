//! Server configuration module
//! Reads listener and logging settings from environment variables

use std::env;
use std::net::{IpAddr, SocketAddr};
use thiserror::Error;
use tracing::info;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
    #[error("Invalid port: {0}")]
    InvalidPort(String),
    #[error("Invalid log format: {0} (expected 'pretty' or 'json')")]
    InvalidLogFormat(String),
}

/// Output format of the tracing fmt layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }

    /// Read `LOG_FORMAT`, falling back to pretty output
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var("LOG_FORMAT") {
            Ok(value) => Self::parse(&value),
            Err(_) => Ok(LogFormat::default()),
        }
    }
}

/// Listener configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let port = env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string());

        let config = Self::from_parts(&host, &port)?;
        info!("Server configuration loaded: host={}, port={}", config.host, config.port);
        Ok(config)
    }

    pub fn from_parts(host: &str, port: &str) -> Result<Self, ConfigError> {
        let host = host
            .trim()
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::InvalidHost(host.to_string()))?;

        let port = port
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidPort(format!("{} ({})", port, e)))?;

        if port == 0 {
            return Err(ConfigError::InvalidPort("port must be non-zero".to_string()));
        }

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
