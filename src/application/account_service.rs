//! Account service exposed over JSON-RPC
//!
//! Two operations showing both validator flavours: `register_account` takes a
//! typed argument validated through its derived rules, `transfer` takes
//! positional JSON arguments validated against a rule table.

use crate::{
    application::behavior::ValidationBehavior,
    config::AppConfig,
    domain::ObjectValidator,
    infrastructure::{
        adapters::{AnnotatedTypeValidator, Constraint, FieldRule, JsonRuleValidator, ValueKind},
        dispatch::{JsonArgsOperation, ServiceDispatcher, TypedOperation},
    },
    shared::error::{AppError, AppResult},
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;
use validator::Validate;

/// Input of `register_account`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterAccount {
    #[validate(length(min = 3, max = 32, message = "username must be between 3 and 32 characters"))]
    pub username: String,

    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[validate(range(min = 18, max = 130, message = "age must be between 18 and 130"))]
    pub age: u32,

    #[serde(default)]
    #[validate(url(message = "homepage must be a valid URL"))]
    pub homepage: Option<String>,
}

/// Field rules applied to `transfer` arguments
pub fn transfer_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new("account", ValueKind::String)
            .required()
            .constraint(Constraint::Pattern("^[a-z0-9_]{3,32}$".to_string())),
        FieldRule::new("amount", ValueKind::Number)
            .required()
            .constraint(Constraint::MinValue(0.01))
            .constraint(Constraint::MaxValue(1_000_000.0)),
        FieldRule::new("currency", ValueKind::String)
            .constraint(Constraint::OneOf(vec!["EUR".to_string(), "USD".to_string()])),
    ]
}

/// Validators installed in front of every account operation, in evaluation order
pub fn account_validators() -> AppResult<Vec<Arc<dyn ObjectValidator>>> {
    Ok(vec![
        Arc::new(AnnotatedTypeValidator::new().register::<RegisterAccount>()),
        Arc::new(JsonRuleValidator::new("transfer-rules", transfer_rules())?),
    ])
}

fn register_account(input: &RegisterAccount) -> AppResult<Value> {
    Ok(json!({
        "username": input.username,
        "email": input.email,
        "status": "registered",
    }))
}

fn transfer(args: &[Value]) -> AppResult<Value> {
    let (from, to) = match args {
        [from, to] => (from, to),
        _ => {
            return Err(AppError::InvalidParameters {
                method: "transfer".to_string(),
                reason: "expected source and destination".to_string(),
            })
        }
    };
    if from.is_null() || to.is_null() {
        return Err(AppError::InvalidParameters {
            method: "transfer".to_string(),
            reason: "source and destination are required".to_string(),
        });
    }
    if from["account"] == to["account"] {
        return Err(AppError::Operation {
            method: "transfer".to_string(),
            reason: "source and destination must differ".to_string(),
        });
    }

    Ok(json!({
        "from": from["account"],
        "to": to["account"],
        "amount": from["amount"],
        "status": "accepted",
    }))
}

/// Build the dispatcher serving the account service
pub fn build_dispatcher(config: &AppConfig) -> AppResult<ServiceDispatcher> {
    let mut dispatcher = ServiceDispatcher::new();
    dispatcher.register_operation(Arc::new(TypedOperation::<RegisterAccount, _>::new("register_account", register_account)))?;
    dispatcher.register_operation(Arc::new(JsonArgsOperation::new("transfer", 2, transfer)))?;

    if config.validation.enabled {
        ValidationBehavior::from_config(&config.validation, account_validators()?)?.apply(&mut dispatcher);
    } else {
        warn!("Parameter validation is disabled; operations will run on unchecked input");
    }

    Ok(dispatcher)
}
