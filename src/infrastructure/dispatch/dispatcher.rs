//! Service dispatcher
//!
//! Resolves an operation, decodes its inputs and runs the registered
//! parameter inspectors around the operation body.

use super::operation::ServiceOperation;
use crate::{
    domain::{Argument, ParameterInspector},
    shared::error::{AppError, AppResult},
};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Operation registry with an ordered inspector chain
#[derive(Clone, Default)]
pub struct ServiceDispatcher {
    operations: HashMap<String, Arc<dyn ServiceOperation>>,
    inspectors: Vec<Arc<dyn ParameterInspector>>,
}

impl ServiceDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operation; names must be unique
    pub fn register_operation(&mut self, operation: Arc<dyn ServiceOperation>) -> AppResult<()> {
        let name = operation.name().to_string();
        if self.operations.contains_key(&name) {
            return Err(AppError::Config(format!("Operation '{}' is already registered", name)));
        }
        self.operations.insert(name, operation);
        Ok(())
    }

    /// Append an inspector; inspectors run in the order they were added
    pub fn add_inspector(&mut self, inspector: Arc<dyn ParameterInspector>) {
        self.inspectors.push(inspector);
    }

    pub fn has_operation(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    /// Registered operation names, sorted
    pub fn operation_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn inspector_count(&self) -> usize {
        self.inspectors.len()
    }

    /// Invoke `operation` with wire `params`
    ///
    /// Every inspector's `before_call` runs before the body; the first error
    /// aborts the call without running the body or any `after_call`. After a
    /// successful body, `after_call` runs in reverse order with the
    /// correlation state its own `before_call` returned.
    pub fn dispatch(&self, operation: &str, params: Option<&Value>) -> AppResult<Value> {
        let target = self
            .operations
            .get(operation)
            .ok_or_else(|| AppError::MethodNotFound { method: operation.to_string() })?;

        let inputs = target.decode_inputs(params)?;
        let views: Vec<Option<&Argument>> = inputs.iter().map(|input| input.as_deref()).collect();

        debug!(operation = %operation, inputs = views.len(), "Dispatching operation");

        let mut states = Vec::with_capacity(self.inspectors.len());
        for inspector in &self.inspectors {
            match inspector.before_call(operation, &views) {
                Ok(state) => states.push(state),
                Err(e) => {
                    if let AppError::ValidationFailed(fault) = &e {
                        warn!(
                            operation = %operation,
                            fault = %fault.message,
                            "Call rejected by parameter validation"
                        );
                    } else {
                        warn!(operation = %operation, error = %e, "Parameter inspector failed");
                    }
                    return Err(e);
                }
            }
        }

        let result = target.invoke(&inputs)?;

        for (inspector, state) in self.inspectors.iter().zip(states).rev() {
            inspector.after_call(operation, &[], &result, state);
        }

        Ok(result)
    }
}
