use super::failure::ValidationFailure;
use crate::shared::error::AppResult;
use std::any::Any;

/// An input argument as seen by validators
pub type Argument = dyn Any + Send + Sync;

/// Pluggable capability that inspects one input object for rule violations
///
/// Implementations must be deterministic for a given target state and must
/// report problems through the returned vector. An `Err` is reserved for a
/// malfunctioning validator and aborts the call as an internal error.
/// `None` is a null argument; validators that do not recognise a target
/// return no failures for it.
pub trait ObjectValidator: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Validate one target
    fn validate(&self, target: Option<&Argument>) -> AppResult<Vec<ValidationFailure>>;
}
