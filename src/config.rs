//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.
//! All configuration is loaded at startup and validated before the application runs.

use std::env;
use std::sync::LazyLock;

use crate::constants::{
    DEFAULT_LOG_FILTER, DEFAULT_MAX_BODY_BYTES, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
    DEFAULT_SUMMARY_QUEUE_NAME,
};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub queue: QueueConfig,
    pub limits: LimitsConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    pub log_format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Summary queue configuration
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Redis URL; summaries are only logged when unset
    pub url: Option<String>,
    pub name: String,
}

/// Request limits
#[derive(Debug, Clone)]
pub struct LimitsConfig {
    pub max_body_bytes: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig::from_env()?,
            queue: QueueConfig::from_env()?,
            limits: LimitsConfig::from_env()?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                rust_log: DEFAULT_LOG_FILTER.to_string(),
                log_format: LogFormat::Text,
            },
            queue: QueueConfig {
                url: None,
                name: DEFAULT_SUMMARY_QUEUE_NAME.to_string(),
            },
            limits: LimitsConfig {
                max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            },
        }
    }
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            host: env::var("SERVER_HOST").unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "text".to_string())
                .parse()?,
        })
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT".to_string())),
        }
    }
}

impl QueueConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("SUMMARY_QUEUE_URL").ok().filter(|url| !url.is_empty()),
            name: env::var("SUMMARY_QUEUE_NAME")
                .unwrap_or_else(|_| DEFAULT_SUMMARY_QUEUE_NAME.to_string()),
        })
    }
}

impl LimitsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_BODY_BYTES.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("MAX_BODY_BYTES".to_string()))?,
        })
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
