//! Validation building blocks shared by the inspector and its validators

pub mod failure;
pub mod validator;
pub mod validator_set;

pub use failure::ValidationFailure;
pub use validator::{Argument, ObjectValidator};
pub use validator_set::ValidatorSet;
