//! HTTP models - Infrastructure concerns
//!
//! JSON-RPC 2.0 wire structures and the per-request context used for logging.

use crate::shared::{error::AppError, logging::LoggingUtils};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// HTTP JSON-RPC request structure
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct JsonRpcRequest {
    /// JSON-RPC version
    #[serde(default = "default_jsonrpc_version")]
    pub jsonrpc: String,

    /// Method name; a missing method is reported by `validate_request`
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub method: String,

    /// Parameters (optional)
    #[serde(default)]
    pub params: Option<Value>,

    /// Request ID
    #[serde(default)]
    pub id: Option<Value>,
}

/// HTTP JSON-RPC response structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC version
    #[serde(default = "default_jsonrpc_version")]
    pub jsonrpc: String,

    /// Result (for successful responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Error (for error responses)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,

    /// Request ID
    pub id: Option<Value>,
}

/// HTTP JSON-RPC error structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    /// Error code
    pub code: i64,

    /// Error message
    pub message: String,

    /// Additional error data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Request context for tracking and logging
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique request ID
    pub request_id: String,

    /// Request method
    pub method: String,

    /// Request timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request
    pub fn new(method: String, params: Option<Value>, id: Option<Value>) -> Self {
        Self {
            jsonrpc: default_jsonrpc_version(),
            method,
            params,
            id,
        }
    }

    /// Validate the envelope (not the parameters)
    pub fn validate_request(&self) -> Result<(), JsonRpcError> {
        if self.jsonrpc != "2.0" {
            return Err(JsonRpcError::invalid_request("jsonrpc must be \"2.0\""));
        }
        self.validate()
            .map_err(|e| JsonRpcError::invalid_request(&format!("Request validation failed: {}", e)))
    }
}

impl JsonRpcResponse {
    /// Create a successful response
    pub fn success(result: Value, id: Option<Value>) -> Self {
        Self {
            jsonrpc: default_jsonrpc_version(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error response
    pub fn error(error: JsonRpcError, id: Option<Value>) -> Self {
        Self {
            jsonrpc: default_jsonrpc_version(),
            result: None,
            error: Some(error),
            id,
        }
    }
}

impl JsonRpcError {
    /// Create a new JSON-RPC error
    pub fn new(code: i64, message: String, data: Option<Value>) -> Self {
        Self { code, message, data }
    }

    /// Create a parse error
    pub fn parse_error() -> Self {
        Self::new(-32700, "Parse error".to_string(), None)
    }

    /// Create an invalid request error
    pub fn invalid_request(reason: &str) -> Self {
        Self::new(-32600, "Invalid Request".to_string(), Some(Value::String(reason.to_string())))
    }
}

impl From<&AppError> for JsonRpcError {
    fn from(err: &AppError) -> Self {
        let body = err.to_jsonrpc_error();
        let message = body["message"].as_str().unwrap_or("Internal error").to_string();
        let data = body.get("data").filter(|d| !d.is_null()).cloned();
        Self::new(err.jsonrpc_code(), message, data)
    }
}

impl RequestContext {
    /// Create a new request context
    pub fn new(method: String) -> Self {
        Self {
            request_id: LoggingUtils::generate_request_id(),
            method,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Milliseconds elapsed since the request arrived
    pub fn elapsed_ms(&self) -> u64 {
        (chrono::Utc::now() - self.timestamp).num_milliseconds().max(0) as u64
    }
}

fn default_jsonrpc_version() -> String {
    "2.0".to_string()
}
