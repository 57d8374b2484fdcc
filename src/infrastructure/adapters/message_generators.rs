//! Fault renderers for aggregated validation failures

use crate::domain::{ErrorMessageGenerator, FaultPayload, ValidationFailure};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;
use std::sync::Arc;

/// Fault rendering selected through configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultFormat {
    Text,
    #[default]
    Json,
}

impl FaultFormat {
    /// Build the generator for this format
    pub fn generator(self) -> Arc<dyn ErrorMessageGenerator> {
        match self {
            FaultFormat::Text => Arc::new(PlainTextMessageGenerator),
            FaultFormat::Json => Arc::new(JsonFaultGenerator),
        }
    }
}

/// Renders failures as a single block of text
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextMessageGenerator;

impl ErrorMessageGenerator for PlainTextMessageGenerator {
    fn generate(&self, operation: &str, failures: &[ValidationFailure]) -> FaultPayload {
        let mut message = format!("Service operation {} failed due to validation errors: \n\n", operation);
        for failure in failures {
            // Writing to a String cannot fail
            let _ = writeln!(message, "{} ", failure);
        }
        FaultPayload::text(operation, message)
    }
}

/// Renders failures as a short message plus structured details
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFaultGenerator;

impl ErrorMessageGenerator for JsonFaultGenerator {
    fn generate(&self, operation: &str, failures: &[ValidationFailure]) -> FaultPayload {
        let errors: Vec<_> = failures
            .iter()
            .map(|f| {
                json!({
                    "member": f.member(),
                    "message": f.message(),
                    "rule": f.rule(),
                })
            })
            .collect();

        FaultPayload::new(
            operation,
            format!("Validation failed for operation '{}'", operation),
            json!({
                "operation": operation,
                "errors": errors,
            }),
        )
    }
}
