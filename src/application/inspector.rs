//! Validating parameter inspector
//!
//! Runs every input argument of a call through every configured validator
//! and rejects the call with one fault carrying all failures when any
//! validator objects. The decision itself is returned as an
//! [`InspectionOutcome`]; only the [`ParameterInspector`] implementation
//! turns a rejection into the host's abort signal.

use crate::{
    domain::{
        Argument, CallContext, CorrelationState, ErrorMessageGenerator, InspectionOutcome, ObjectValidator,
        ParameterInspector, ValidationFailure, ValidatorSet,
    },
    shared::error::{AppError, AppResult},
};
use serde_json::Value;
use std::sync::Arc;

/// Parameter inspector that gates a call on input validation
#[derive(Clone)]
pub struct ValidatingParameterInspector {
    validators: ValidatorSet,
    message_generator: Arc<dyn ErrorMessageGenerator>,
}

impl ValidatingParameterInspector {
    /// Create a new inspector from a validator set and a message generator
    pub fn new(validators: ValidatorSet, message_generator: Arc<dyn ErrorMessageGenerator>) -> Self {
        Self {
            validators,
            message_generator,
        }
    }

    /// Start building an inspector
    pub fn builder() -> ValidatingParameterInspectorBuilder {
        ValidatingParameterInspectorBuilder::default()
    }

    pub fn validators(&self) -> &ValidatorSet {
        &self.validators
    }

    /// Aggregate failures for every input, then every validator, in order
    pub fn collect_failures(&self, call: &CallContext<'_>) -> AppResult<Vec<ValidationFailure>> {
        let mut failures = Vec::new();

        for input in call.inputs() {
            for validator in &self.validators {
                failures.extend(validator.validate(*input)?);
            }
        }

        Ok(failures)
    }

    /// Decide whether the call may proceed
    pub fn inspect(&self, call: &CallContext<'_>) -> AppResult<InspectionOutcome> {
        let failures = self.collect_failures(call)?;

        if failures.is_empty() {
            return Ok(InspectionOutcome::Proceed);
        }

        Ok(InspectionOutcome::Reject(
            self.message_generator.generate(call.operation(), &failures),
        ))
    }
}

impl ParameterInspector for ValidatingParameterInspector {
    fn before_call(&self, operation: &str, inputs: &[Option<&Argument>]) -> AppResult<Option<CorrelationState>> {
        match self.inspect(&CallContext::new(operation, inputs))? {
            InspectionOutcome::Proceed => Ok(None),
            InspectionOutcome::Reject(fault) => Err(AppError::ValidationFailed(fault)),
        }
    }

    fn after_call(
        &self,
        _operation: &str,
        _outputs: &[Option<&Argument>],
        _return_value: &Value,
        _correlation_state: Option<CorrelationState>,
    ) {
    }
}

impl std::fmt::Debug for ValidatingParameterInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatingParameterInspector")
            .field("validators", &self.validators)
            .finish_non_exhaustive()
    }
}

/// Builder that checks the inspector's dependencies eagerly
#[derive(Default)]
pub struct ValidatingParameterInspectorBuilder {
    validators: Vec<Arc<dyn ObjectValidator>>,
    message_generator: Option<Arc<dyn ErrorMessageGenerator>>,
}

impl ValidatingParameterInspectorBuilder {
    /// Append a validator; order of calls is evaluation order
    pub fn validator(mut self, validator: Arc<dyn ObjectValidator>) -> Self {
        self.validators.push(validator);
        self
    }

    pub fn validators(mut self, validators: impl IntoIterator<Item = Arc<dyn ObjectValidator>>) -> Self {
        self.validators.extend(validators);
        self
    }

    pub fn message_generator(mut self, generator: Arc<dyn ErrorMessageGenerator>) -> Self {
        self.message_generator = Some(generator);
        self
    }

    pub fn build(self) -> AppResult<ValidatingParameterInspector> {
        let validators = ValidatorSet::new(self.validators)?;
        let message_generator = self
            .message_generator
            .ok_or_else(|| AppError::Config("errorMessageGenerator must be provided".to_string()))?;

        Ok(ValidatingParameterInspector::new(validators, message_generator))
    }
}
