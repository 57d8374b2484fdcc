use super::validator::ObjectValidator;
use crate::shared::error::{AppError, AppResult};
use std::fmt;
use std::sync::Arc;

/// Ordered, non-empty collection of distinct validators
#[derive(Clone)]
pub struct ValidatorSet {
    validators: Arc<[Arc<dyn ObjectValidator>]>,
}

impl ValidatorSet {
    /// Create a validator set, rejecting an empty or duplicated collection
    pub fn new(validators: Vec<Arc<dyn ObjectValidator>>) -> AppResult<Self> {
        if validators.is_empty() {
            return Err(AppError::Config("At least one validator is required".to_string()));
        }

        for (i, validator) in validators.iter().enumerate() {
            let duplicate = validators[..i]
                .iter()
                .any(|earlier| std::ptr::addr_eq(Arc::as_ptr(earlier), Arc::as_ptr(validator)));
            if duplicate {
                return Err(AppError::Config(format!(
                    "Validator '{}' was registered more than once",
                    validator.name()
                )));
            }
        }

        Ok(Self { validators: validators.into() })
    }

    /// Create a validator set from a possibly absent collection
    pub fn from_option(validators: Option<Vec<Arc<dyn ObjectValidator>>>) -> AppResult<Self> {
        let validators = validators.ok_or_else(|| AppError::Config("validators must be provided".to_string()))?;
        Self::new(validators)
    }

    /// Iterate validators in configured order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ObjectValidator>> {
        self.validators.iter()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Validator names in configured order
    pub fn names(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.name()).collect()
    }
}

impl<'a> IntoIterator for &'a ValidatorSet {
    type Item = &'a Arc<dyn ObjectValidator>;
    type IntoIter = std::slice::Iter<'a, Arc<dyn ObjectValidator>>;

    fn into_iter(self) -> Self::IntoIter {
        self.validators.iter()
    }
}

impl fmt::Debug for ValidatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorSet").field("validators", &self.names()).finish()
    }
}
