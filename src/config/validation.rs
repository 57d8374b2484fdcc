//! Configuration validation module
//!
//! This module provides additional validation logic for configuration
//! beyond the basic validator crate validation.

use crate::config::AppConfig;
use crate::shared::error::AppError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 3] = ["json", "compact", "full"];

/// Configuration validator for additional validation logic
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the complete configuration
    pub fn validate_config(config: &AppConfig) -> crate::Result<()> {
        Self::validate_logging_config(&config.logging)

    }

    /// Validate logging configuration
    fn validate_logging_config(logging: &crate::config::app_config::LoggingConfig) -> crate::Result<()> {
        if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
            return Err(AppError::Config(format!("Invalid log level: {}", logging.level)));
        }

        if !LOG_FORMATS.contains(&logging.format.as_str()) {
            return Err(AppError::Config(format!("Invalid log format: {}", logging.format)));
        }

        Ok(())
    }
}
