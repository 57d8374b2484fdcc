//! Infrastructure adapters module
//!
//! Concrete validators and fault renderers plugged into the inspector.

pub mod annotated_validator;
pub mod fn_validator;
pub mod json_rule_validator;
pub mod message_generators;

pub use annotated_validator::AnnotatedTypeValidator;
pub use fn_validator::FnValidator;
pub use json_rule_validator::{Constraint, FieldRule, JsonRuleValidator, ValueKind};
pub use message_generators::{FaultFormat, JsonFaultGenerator, PlainTextMessageGenerator};
