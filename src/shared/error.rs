//! Error handling module
//!
//! This module provides centralized error handling for the application.

use crate::domain::fault::FaultPayload;
use serde_json::Value;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// The single abort signal raised when a call fails parameter validation
    #[error("{}", .0.message)]
    ValidationFailed(FaultPayload),

    #[error("Validator '{validator}' failed: {reason}")]
    Validator { validator: String, reason: String },

    #[error("Method not found: {method}")]
    MethodNotFound { method: String },

    #[error("Invalid parameters for method {method}: {reason}")]
    InvalidParameters { method: String, reason: String },

    #[error("Operation {method} failed: {reason}")]
    Operation { method: String, reason: String },

    #[error("JSON serialization error: {0}")]
    Json(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// JSON-RPC error code for this error
    pub fn jsonrpc_code(&self) -> i64 {
        match self {
            AppError::MethodNotFound { .. } => -32601,
            AppError::InvalidParameters { .. } | AppError::ValidationFailed(_) => -32602,
            AppError::Json(_) => -32700,
            AppError::Operation { .. } => -32000,
            _ => -32603,
        }
    }

    /// Convert to JSON-RPC error object
    pub fn to_jsonrpc_error(&self) -> Value {
        let code = self.jsonrpc_code();
        match self {
            AppError::ValidationFailed(fault) => serde_json::json!({
                "code": code,
                "message": fault.message,
                "data": fault.details,
            }),
            AppError::Json(_) => serde_json::json!({
                "code": code,
                "message": "Parse error",
            }),
            // Internal details stay in the logs
            AppError::Config(_) | AppError::Validator { .. } | AppError::Internal(_) => serde_json::json!({
                "code": code,
                "message": "Internal error",
            }),
            other => serde_json::json!({
                "code": code,
                "message": other.to_string(),
            }),
        }
    }

    /// Get HTTP status code for this error
    pub fn http_status_code(&self) -> warp::http::StatusCode {
        match self {
            AppError::ValidationFailed(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::InvalidParameters { .. } => warp::http::StatusCode::BAD_REQUEST,
            AppError::Json(_) => warp::http::StatusCode::BAD_REQUEST,
            AppError::MethodNotFound { .. } => warp::http::StatusCode::NOT_FOUND,
            _ => warp::http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error is the validation abort signal
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, AppError::ValidationFailed(_))
    }
}

/// Application result type
pub type AppResult<T> = Result<T, AppError>;

impl warp::reject::Reject for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err.to_string())
    }
}
