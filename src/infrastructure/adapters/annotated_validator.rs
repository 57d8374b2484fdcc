//! Annotation-driven validator
//!
//! Validates arguments whose types derive `validator::Validate`. Types are
//! registered up front so the lookup at call time is a single `TypeId` hit;
//! arguments of unregistered types, and null arguments, produce no failures.

use crate::{
    domain::{Argument, ObjectValidator, ValidationFailure},
    shared::error::AppResult,
};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

type CheckFn = fn(&Argument) -> Option<Vec<ValidationFailure>>;

#[derive(Clone, Copy)]
struct Registration {
    type_name: &'static str,
    check: CheckFn,
}

/// Validator backed by `#[derive(Validate)]` rule declarations
#[derive(Clone, Default)]
pub struct AnnotatedTypeValidator {
    registrations: HashMap<TypeId, Registration>,
}

impl AnnotatedTypeValidator {
    /// Create a validator with no registered types
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type whose rules should be enforced
    pub fn register<T>(mut self) -> Self
    where
        T: Validate + Send + Sync + 'static,
    {
        self.registrations.insert(
            TypeId::of::<T>(),
            Registration {
                type_name: std::any::type_name::<T>(),
                check: check_as::<T>,
            },
        );
        self
    }

    /// Whether `T` has been registered
    pub fn is_registered<T: 'static>(&self) -> bool {
        self.registrations.contains_key(&TypeId::of::<T>())
    }

    /// Names of the registered types
    pub fn registered_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.registrations.values().map(|r| r.type_name).collect();
        names.sort_unstable();
        names
    }
}

impl ObjectValidator for AnnotatedTypeValidator {
    fn name(&self) -> &str {
        "annotations"
    }

    fn validate(&self, target: Option<&Argument>) -> AppResult<Vec<ValidationFailure>> {
        let Some(target) = target else {
            return Ok(Vec::new());
        };

        let any: &dyn Any = target;
        let failures = self
            .registrations
            .get(&any.type_id())
            .and_then(|registration| (registration.check)(target))
            .unwrap_or_default();

        Ok(failures)
    }
}

fn check_as<T: Validate + 'static>(target: &Argument) -> Option<Vec<ValidationFailure>> {
    let value = target.downcast_ref::<T>()?;
    Some(match value.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => flatten_errors(&errors),
    })
}

/// Flatten nested `ValidationErrors` into failures ordered by member path
pub fn flatten_errors(errors: &ValidationErrors) -> Vec<ValidationFailure> {
    let mut failures = Vec::new();
    collect(errors, "", &mut failures);
    // HashMap iteration order is unspecified; stable sort keeps per-field rule order
    failures.sort_by(|a, b| a.member().cmp(b.member()));
    failures
}

fn collect(errors: &ValidationErrors, prefix: &str, out: &mut Vec<ValidationFailure>) {
    for (field, kind) in errors.errors() {
        let field = field.to_string();
        let member = if field == "__all__" {
            prefix.to_string()
        } else if prefix.is_empty() {
            field.clone()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    let message = error
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| default_message(&member, &error.code));
                    out.push(ValidationFailure::new(member.clone(), message).with_rule(error.code.to_string()));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(nested, &member, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(nested, &format!("{member}[{index}]"), out);
                }
            }
        }
    }
}

fn default_message(member: &str, code: &str) -> String {
    if member.is_empty() {
        format!("object failed {code} validation")
    } else {
        format!("{member} failed {code} validation")
    }
}
