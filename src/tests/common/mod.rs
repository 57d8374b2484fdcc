//! Common test utilities and scripted collaborators

use crate::{
    domain::{Argument, ErrorMessageGenerator, FaultPayload, ObjectValidator, ValidationFailure},
    shared::error::AppResult,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Marker argument identified by a label
#[derive(Debug, Clone, PartialEq)]
pub struct Labeled(pub &'static str);

/// Wrap any value as an input argument view
pub fn arg<T: std::any::Any + Send + Sync>(value: &T) -> Option<&Argument> {
    Some(value)
}

/// Validator whose answers are scripted per input label
pub struct ScriptedValidator {
    name: &'static str,
    answers: Vec<(&'static str, Vec<ValidationFailure>)>,
    calls: AtomicUsize,
}

impl ScriptedValidator {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            answers: Vec::new(),
            calls: AtomicUsize::new(0),
        }
    }

    /// Report `failures` whenever the input labelled `label` is validated
    pub fn on(mut self, label: &'static str, failures: Vec<ValidationFailure>) -> Self {
        self.answers.push((label, failures));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ObjectValidator for ScriptedValidator {
    fn name(&self) -> &str {
        self.name
    }

    fn validate(&self, target: Option<&Argument>) -> AppResult<Vec<ValidationFailure>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let Some(Labeled(label)) = target.and_then(|t| t.downcast_ref::<Labeled>()) else {
            return Ok(Vec::new());
        };
        Ok(self
            .answers
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, failures)| failures.clone())
            .unwrap_or_default())
    }
}

/// Message generator that records every invocation
#[derive(Default)]
pub struct RecordingGenerator {
    pub invocations: Mutex<Vec<(String, Vec<ValidationFailure>)>>,
}

impl RecordingGenerator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl ErrorMessageGenerator for RecordingGenerator {
    fn generate(&self, operation: &str, failures: &[ValidationFailure]) -> FaultPayload {
        self.invocations
            .lock()
            .unwrap()
            .push((operation.to_string(), failures.to_vec()));
        FaultPayload::new(
            operation,
            format!("{} rejected", operation),
            serde_json::to_value(failures).unwrap_or_default(),
        )
    }
}
