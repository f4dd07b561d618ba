//! Application configuration management
//!
//! This module handles loading and validating configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::constants::{DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_ROOT_PATH};

/// Global application configuration (lazily initialized)
pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Config::from_env().expect("Failed to load configuration from environment")
});

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

/// File storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root under which `uploads/attachments/<problem>` directories live
    pub root_path: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database: DatabaseConfig::from_env()?,
            storage: StorageConfig::from_env(),
            logging: LoggingConfig::from_env(),
        })
    }
}

impl DatabaseConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            url: env::var("DATABASE_URL")
                .map_err(|_| ConfigError::Missing("DATABASE_URL".to_string()))?,
            max_connections: parse_max_connections(env::var("DATABASE_MAX_CONNECTIONS").ok())?,
        })
    }
}

impl StorageConfig {
    fn from_env() -> Self {
        Self {
            root_path: PathBuf::from(
                env::var("PROBLEMSET_ROOT").unwrap_or_else(|_| DEFAULT_ROOT_PATH.to_string()),
            ),
        }
    }
}

impl LoggingConfig {
    fn from_env() -> Self {
        Self {
            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

fn parse_max_connections(raw: Option<String>) -> Result<u32, ConfigError> {
    raw.unwrap_or_else(|| DEFAULT_DATABASE_MAX_CONNECTIONS.to_string())
        .parse()
        .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS".to_string()))
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_max_connections() {
        assert_eq!(
            parse_max_connections(None).unwrap(),
            DEFAULT_DATABASE_MAX_CONNECTIONS
        );
        assert_eq!(parse_max_connections(Some("12".to_string())).unwrap(), 12);
    }

    #[test]
    fn test_invalid_max_connections() {
        let err = parse_max_connections(Some("many".to_string())).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "DATABASE_MAX_CONNECTIONS"));
    }
}
