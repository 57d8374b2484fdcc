//! Rule-table validator for JSON arguments
//!
//! Checks `serde_json::Value` object arguments against a list of field rules.
//! Every broken rule is reported, in rule declaration order.

use crate::{
    domain::{Argument, ObjectValidator, ValidationFailure},
    shared::error::{AppError, AppResult},
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Expected JSON type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Any,
}

/// Constraint applied to a present field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    MinLength(usize),
    MaxLength(usize),
    MinValue(f64),
    MaxValue(f64),
    Pattern(String),
    OneOf(Vec<String>),
}

/// Declarative rule for one field; dotted names address nested members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRule {
    pub name: String,
    pub kind: ValueKind,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
}

impl FieldRule {
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            constraints: Vec::new(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

enum Check {
    MinLength(usize),
    MaxLength(usize),
    MinValue(f64),
    MaxValue(f64),
    Pattern(Regex),
    OneOf(Vec<String>),
}

struct CompiledRule {
    name: String,
    pointer: String,
    kind: ValueKind,
    required: bool,
    checks: Vec<Check>,
}

/// Validator for JSON object arguments
pub struct JsonRuleValidator {
    name: String,
    rules: Vec<CompiledRule>,
}

impl JsonRuleValidator {
    /// Compile the rule table; invalid patterns are configuration errors
    pub fn new(name: impl Into<String>, rules: Vec<FieldRule>) -> AppResult<Self> {
        let rules = rules.into_iter().map(compile).collect::<AppResult<Vec<_>>>()?;
        Ok(Self { name: name.into(), rules })
    }

    fn check_rule(rule: &CompiledRule, target: &Value, out: &mut Vec<ValidationFailure>) {
        let value = match target.pointer(&rule.pointer) {
            Some(Value::Null) | None => {
                if rule.required {
                    out.push(
                        ValidationFailure::new(&rule.name, format!("{} is required", rule.name)).with_rule("required"),
                    );
                }
                return;
            }
            Some(value) => value,
        };

        if !matches_kind(value, rule.kind) {
            out.push(
                ValidationFailure::new(&rule.name, format!("{} must be of type {:?}", rule.name, rule.kind))
                    .with_rule("type"),
            );
            return;
        }

        for check in &rule.checks {
            if let Some(failure) = apply(check, value, &rule.name) {
                out.push(failure);
            }
        }
    }
}

impl ObjectValidator for JsonRuleValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn validate(&self, target: Option<&Argument>) -> AppResult<Vec<ValidationFailure>> {
        let Some(value) = target.and_then(|t| t.downcast_ref::<Value>()) else {
            return Ok(Vec::new());
        };
        if !value.is_object() {
            return Ok(Vec::new());
        }

        let mut failures = Vec::new();
        for rule in &self.rules {
            Self::check_rule(rule, value, &mut failures);
        }
        Ok(failures)
    }
}

fn compile(rule: FieldRule) -> AppResult<CompiledRule> {
    let checks = rule
        .constraints
        .into_iter()
        .map(|constraint| {
            Ok(match constraint {
                Constraint::MinLength(n) => Check::MinLength(n),
                Constraint::MaxLength(n) => Check::MaxLength(n),
                Constraint::MinValue(v) => Check::MinValue(v),
                Constraint::MaxValue(v) => Check::MaxValue(v),
                Constraint::OneOf(values) => Check::OneOf(values),
                Constraint::Pattern(pattern) => Check::Pattern(Regex::new(&pattern).map_err(|e| {
                    AppError::Config(format!("Invalid regex pattern '{}' for field {}: {}", pattern, rule.name, e))
                })?),
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let pointer = pointer_for(&rule.name);
    Ok(CompiledRule {
        name: rule.name,
        pointer,
        kind: rule.kind,
        required: rule.required,
        checks,
    })
}

/// JSON pointer for a dotted field name; segments are escaped per RFC 6901
fn pointer_for(name: &str) -> String {
    name.split('.')
        .map(|segment| format!("/{}", segment.replace('~', "~0").replace('/', "~1")))
        .collect()
}

fn matches_kind(value: &Value, kind: ValueKind) -> bool {
    match kind {
        ValueKind::String => value.is_string(),
        ValueKind::Number => value.is_number(),
        ValueKind::Boolean => value.is_boolean(),
        ValueKind::Object => value.is_object(),
        ValueKind::Array => value.is_array(),
        ValueKind::Any => true,
    }
}

fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

fn apply(check: &Check, value: &Value, field: &str) -> Option<ValidationFailure> {
    let failure = |message: String, rule: &str| Some(ValidationFailure::new(field, message).with_rule(rule));

    match check {
        Check::MinLength(min) => match length_of(value) {
            Some(len) if len < *min => failure(format!("{} too short (min {})", field, min), "min_length"),
            _ => None,
        },
        Check::MaxLength(max) => match length_of(value) {
            Some(len) if len > *max => failure(format!("{} too long (max {})", field, max), "max_length"),
            _ => None,
        },
        Check::MinValue(min) => match value.as_f64() {
            Some(n) if n < *min => failure(format!("{} too small: minimum value is {}", field, min), "min_value"),
            _ => None,
        },
        Check::MaxValue(max) => match value.as_f64() {
            Some(n) if n > *max => failure(format!("{} too large: maximum value is {}", field, max), "max_value"),
            _ => None,
        },
        Check::Pattern(regex) => match value.as_str() {
            Some(s) if !regex.is_match(s) => {
                failure(format!("{} does not match pattern {}", field, regex.as_str()), "pattern")
            }
            _ => None,
        },
        Check::OneOf(allowed) => match value.as_str() {
            Some(s) if !allowed.iter().any(|a| a == s) => {
                failure(format!("{} must be one of: {}", field, allowed.join(", ")), "one_of")
            }
            _ => None,
        },
    }
}
