//! RPC Param Guard - validating parameter inspection for JSON-RPC dispatch
//!
//! Every call is checked against a set of pluggable validators before the
//! operation body runs. Failures from all arguments and all validators are
//! aggregated into one fault, and the operation never executes when any
//! validator objects.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

#[cfg(test)]
mod tests;

pub use application::{ValidatingParameterInspector, ValidationBehavior};
pub use config::AppConfig;
pub use domain::{
    Argument, CallContext, CorrelationState, ErrorMessageGenerator, FaultPayload, InspectionOutcome, ObjectValidator,
    ParameterInspector, ValidationFailure, ValidatorSet,
};
pub use infrastructure::http::HttpServer;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
