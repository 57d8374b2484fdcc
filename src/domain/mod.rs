//! Domain layer - Core validation model
//!
//! This module contains the types and capabilities the validating inspector
//! is built from, independent of the dispatch pipeline and HTTP surface.

pub mod call;
pub mod fault;
pub mod validation;

pub use call::{CallContext, CorrelationState, InspectionOutcome, ParameterInspector};
pub use fault::{ErrorMessageGenerator, FaultPayload};
pub use validation::{Argument, ObjectValidator, ValidationFailure, ValidatorSet};
