//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use crate::infrastructure::adapters::FaultFormat;
use crate::shared::error::AppError;
use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use validator::Validate;

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to
    pub bind_address: IpAddr,

    /// Port to listen on (0 picks a free port)
    pub port: u16,

    /// Maximum request body size in bytes
    #[validate(range(min = 64, max = 16777216))]
    pub max_request_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: IpAddr::from([127, 0, 0, 1]),
            port: 8080,
            max_request_size: 1024 * 1024, // 1MB
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,

    /// Log format: "json", "compact" or "full"
    #[validate(length(min = 1))]
    pub format: String,

    /// Include thread, file and line metadata
    pub structured: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
            structured: true,
        }
    }
}

/// Parameter validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Attach the validating inspector to the dispatcher
    pub enabled: bool,

    /// How rejected calls are rendered
    pub fault_format: FaultFormat,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            fault_format: FaultFormat::Json,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Logging configuration
    pub logging: LoggingConfig,

    /// Validation configuration
    pub validation: ValidationConfig,
}

impl AppConfig {
    /// Load configuration from defaults, `Conf.toml` and `GUARD__*` environment variables
    pub fn load() -> crate::Result<Self> {
        Self::load_from("Conf")
    }

    /// Load configuration using `file` as the optional file source
    pub fn load_from(file: &str) -> crate::Result<Self> {
        let defaults = config::Config::try_from(&AppConfig::default())?;

        let config = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("GUARD").separator("__"))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config
            .try_deserialize()
            .map_err(|e| AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config
            .validate_config()
            .map_err(|e| AppError::Config(format!("Configuration validation failed: {}", e)))?;
        crate::config::ConfigValidator::validate_config(&config)?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.server.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}
