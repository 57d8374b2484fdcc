//! Application layer - Parameter inspection and the services it guards
//!
//! This module contains the validating inspector, the behavior that attaches
//! it to a dispatcher, and the account service served by the binary.

pub mod account_service;
pub mod behavior;
pub mod inspector;

pub use behavior::ValidationBehavior;
pub use inspector::{ValidatingParameterInspector, ValidatingParameterInspectorBuilder};
