//! Per-call lifecycle types shared between the host dispatcher and inspectors

use super::fault::FaultPayload;
use super::validation::Argument;
use crate::shared::error::AppResult;
use serde_json::Value;
use std::any::Any;

/// Opaque value threaded from `before_call` to `after_call`
pub type CorrelationState = Box<dyn Any + Send + Sync>;

/// Read-only view of one invocation: operation name and ordered inputs
#[derive(Clone, Copy)]
pub struct CallContext<'a> {
    operation: &'a str,
    inputs: &'a [Option<&'a Argument>],
}

impl<'a> CallContext<'a> {
    pub fn new(operation: &'a str, inputs: &'a [Option<&'a Argument>]) -> Self {
        Self { operation, inputs }
    }

    pub fn operation(&self) -> &'a str {
        self.operation
    }

    pub fn inputs(&self) -> &'a [Option<&'a Argument>] {
        self.inputs
    }
}

impl std::fmt::Debug for CallContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallContext")
            .field("operation", &self.operation)
            .field("inputs", &self.inputs.len())
            .finish()
    }
}

/// Decision reached for one call before the operation body runs
#[derive(Debug, Clone, PartialEq)]
pub enum InspectionOutcome {
    /// No failures, the call continues
    Proceed,
    /// At least one failure, the operation must not run
    Reject(FaultPayload),
}

impl InspectionOutcome {
    pub fn is_proceed(&self) -> bool {
        matches!(self, InspectionOutcome::Proceed)
    }
}

/// Lifecycle hooks the host dispatcher invokes around every operation
///
/// `before_call` runs exactly once before the operation body. Returning an
/// error aborts the call and `after_call` is never invoked for it.
/// `after_call` runs exactly once after the operation completes successfully
/// and receives whatever `before_call` returned.
pub trait ParameterInspector: Send + Sync {
    fn before_call(&self, operation: &str, inputs: &[Option<&Argument>]) -> AppResult<Option<CorrelationState>>;

    fn after_call(
        &self,
        operation: &str,
        outputs: &[Option<&Argument>],
        return_value: &Value,
        correlation_state: Option<CorrelationState>,
    );
}
