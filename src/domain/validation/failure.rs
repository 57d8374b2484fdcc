use serde::Serialize;
use std::fmt;

/// One broken rule on one object
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationFailure {
    member: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<String>,
}

impl ValidationFailure {
    /// Failure on a named member
    pub fn new(member: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Object-level failure with no member path
    pub fn object(message: impl Into<String>) -> Self {
        Self::new(String::new(), message)
    }

    /// Attach the identifier of the violated rule
    pub fn with_rule(mut self, rule: impl Into<String>) -> Self {
        self.rule = Some(rule.into());
        self
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn rule(&self) -> Option<&str> {
        self.rule.as_deref()
    }

    /// Whether this failure applies to the object as a whole
    pub fn is_object_level(&self) -> bool {
        self.member.is_empty()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.member.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.member, self.message)
        }
    }
}
