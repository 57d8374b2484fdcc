//! Logging utilities module
//!
//! This module provides centralized logging functionality and utilities.

use crate::shared::error::AppError;
use tracing::{error, info, warn};

/// Logging utilities for the application
pub struct LoggingUtils;

impl LoggingUtils {
    /// Initialize logging with the specified configuration
    pub fn initialize(level: &str, format: &str, structured: bool) -> crate::Result<()> {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        let builder = fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(structured)
            .with_thread_names(structured)
            .with_file(structured)
            .with_line_number(structured)
            .with_ansi(false);

        let result = match format {
            "json" => tracing::subscriber::set_global_default(builder.json().finish()),
            "compact" => tracing::subscriber::set_global_default(builder.compact().finish()),
            _ => tracing::subscriber::set_global_default(builder.finish()),
        };

        result.map_err(|e| AppError::Internal(format!("Failed to initialize logging: {}", e)))
    }

    /// Log an incoming request
    pub fn log_request(request_id: &str, method: &str, params: Option<&serde_json::Value>) {
        info!(
            request_id = %request_id,
            method = %method,
            params = ?params,
            "Processing RPC request"
        );
    }

    /// Log a successful response
    pub fn log_success(request_id: &str, method: &str, duration_ms: u64) {
        info!(
            request_id = %request_id,
            method = %method,
            duration_ms = %duration_ms,
            "Request completed successfully"
        );
    }

    /// Log an error response; validation rejections are expected and logged at warn
    pub fn log_error(request_id: &str, method: &str, error: &AppError, duration_ms: u64) {
        if error.is_validation_failure() {
            warn!(
                request_id = %request_id,
                method = %method,
                duration_ms = %duration_ms,
                "Request rejected by parameter validation"
            );
        } else {
            error!(
                request_id = %request_id,
                method = %method,
                error = %error,
                duration_ms = %duration_ms,
                "Request failed"
            );
        }
    }

    /// Generate a unique request ID
    pub fn generate_request_id() -> String {
        format!("req_{}", uuid::Uuid::new_v4().simple())
    }
}
