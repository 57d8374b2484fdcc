//! Closure-backed validator for custom business rules

use crate::{
    domain::{Argument, ObjectValidator, ValidationFailure},
    shared::error::AppResult,
};
use std::any::Any;

type ValidateFn = dyn Fn(Option<&Argument>) -> Vec<ValidationFailure> + Send + Sync;

/// Validator wrapping a plain function or closure
pub struct FnValidator {
    name: String,
    check: Box<ValidateFn>,
}

impl FnValidator {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(Option<&Argument>) -> Vec<ValidationFailure> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Box::new(check),
        }
    }

    /// Validator that only sees arguments of type `T`
    pub fn for_type<T, F>(name: impl Into<String>, check: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> Vec<ValidationFailure> + Send + Sync + 'static,
    {
        Self::new(name, move |target| {
            target
                .and_then(|t| t.downcast_ref::<T>())
                .map(&check)
                .unwrap_or_default()
        })
    }
}

impl ObjectValidator for FnValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, target: Option<&Argument>) -> AppResult<Vec<ValidationFailure>> {
        Ok((self.check)(target))
    }
}
