//! Fault payloads and the generator capability that renders them

use super::validation::ValidationFailure;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rendered fault handed to the host's fault-signaling mechanism
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultPayload {
    /// Operation the fault was raised for
    pub operation: String,

    /// Rendered, human-readable message
    pub message: String,

    /// Structured details, `Null` when the generator renders text only
    #[serde(default)]
    pub details: Value,

    /// When the fault was produced
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl FaultPayload {
    /// Create a new fault payload
    pub fn new(operation: impl Into<String>, message: impl Into<String>, details: Value) -> Self {
        Self {
            operation: operation.into(),
            message: message.into(),
            details,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Create a text-only fault
    pub fn text(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(operation, message, Value::Null)
    }
}

/// Turns an operation name and its aggregated failures into one fault
pub trait ErrorMessageGenerator: Send + Sync {
    /// Render the fault for `operation` from the ordered `failures`
    fn generate(&self, operation: &str, failures: &[ValidationFailure]) -> FaultPayload;
}
