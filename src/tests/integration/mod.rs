//! Integration tests across the inspector, dispatcher and account service
//!
//! - Aggregation order across inputs and validators for real operations
//! - Rejected calls never reach the operation body
//! - Fault rendering as selected by configuration

use crate::{
    application::{account_service::build_dispatcher, ValidatingParameterInspector, ValidationBehavior},
    config::AppConfig,
    domain::{CallContext, ObjectValidator, ValidationFailure},
    infrastructure::{
        adapters::{FaultFormat, PlainTextMessageGenerator},
        dispatch::{JsonArgsOperation, ServiceDispatcher},
    },
    shared::error::AppError,
    tests::{
        common::{arg, Labeled, RecordingGenerator, ScriptedValidator},
        config,
    },
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn fault_errors(err: &AppError) -> Vec<(String, String)> {
    let AppError::ValidationFailed(fault) = err else {
        panic!("expected validation failure, got {:?}", err);
    };
    fault.details["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| {
            (
                e["member"].as_str().unwrap().to_string(),
                e["rule"].as_str().unwrap_or_default().to_string(),
            )
        })
        .collect()
}

#[test]
fn transfer_failures_are_grouped_by_input_position() {
    config::init();
    let dispatcher = build_dispatcher(&config::test_config()).unwrap();

    let params = json!([
        {"account": "BAD NAME", "amount": 0},
        {"account": "bob_1", "currency": "GBP"}
    ]);
    let err = dispatcher.dispatch("transfer", Some(&params)).unwrap_err();

    assert_eq!(err.jsonrpc_code(), -32602);
    assert_eq!(
        fault_errors(&err),
        vec![
            ("account".to_string(), "pattern".to_string()),
            ("amount".to_string(), "min_value".to_string()),
            ("amount".to_string(), "required".to_string()),
            ("currency".to_string(), "one_of".to_string()),
        ]
    );
}

#[test]
fn valid_transfer_reaches_the_operation() {
    let dispatcher = build_dispatcher(&config::test_config()).unwrap();
    let params = json!([
        {"account": "alice", "amount": 25.5, "currency": "EUR"},
        {"account": "bob_1", "amount": 25.5}
    ]);

    let result = dispatcher.dispatch("transfer", Some(&params)).unwrap();
    assert_eq!(result["status"], "accepted");
    assert_eq!(result["to"], "bob_1");
}

#[test]
fn operation_errors_surface_after_validation_passes() {
    let dispatcher = build_dispatcher(&config::test_config()).unwrap();
    let params = json!([
        {"account": "alice", "amount": 1},
        {"account": "alice", "amount": 1}
    ]);

    let err = dispatcher.dispatch("transfer", Some(&params)).unwrap_err();
    assert!(matches!(err, AppError::Operation { .. }));
    assert!(!err.is_validation_failure());
}

#[test]
fn typed_registration_reports_every_broken_field() {
    let dispatcher = build_dispatcher(&config::test_config()).unwrap();
    let params = json!({"username": "al", "email": "nope", "age": 7, "homepage": "not a url"});

    let err = dispatcher.dispatch("register_account", Some(&params)).unwrap_err();
    let members: Vec<String> = fault_errors(&err).into_iter().map(|(m, _)| m).collect();
    assert_eq!(members, vec!["age", "email", "homepage", "username"]);
}

#[test]
fn absent_arguments_pass_validation() {
    let mut dispatcher = ServiceDispatcher::new();
    let invoked = Arc::new(AtomicUsize::new(0));
    let counter = invoked.clone();
    dispatcher
        .register_operation(Arc::new(JsonArgsOperation::new("ping", 1, move |_args: &[Value]| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(json!("pong"))
        })))
        .unwrap();
    let behavior = ValidationBehavior::from_config(
        &config::test_config().validation,
        vec![Arc::new(ScriptedValidator::new("strict")) as Arc<dyn ObjectValidator>],
    )
    .unwrap();
    behavior.apply(&mut dispatcher);

    assert_eq!(dispatcher.dispatch("ping", None).unwrap(), json!("pong"));
    assert_eq!(invoked.load(Ordering::SeqCst), 1);
}

#[test]
fn rejected_call_never_runs_the_body() {
    let mut dispatcher = ServiceDispatcher::new();
    let invoked = Arc::new(AtomicUsize::new(0));
    let counter = invoked.clone();
    dispatcher
        .register_operation(Arc::new(JsonArgsOperation::new("echo", 1, move |args: &[Value]| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(args[0].clone())
        })))
        .unwrap();

    let rejecting = crate::infrastructure::adapters::FnValidator::new("always", |_| {
        vec![ValidationFailure::object("rejected")]
    });
    let inspector = ValidatingParameterInspector::builder()
        .validator(Arc::new(rejecting))
        .message_generator(Arc::new(PlainTextMessageGenerator))
        .build()
        .unwrap();
    ValidationBehavior::new(Arc::new(inspector)).apply(&mut dispatcher);

    let err = dispatcher.dispatch("echo", Some(&json!([1]))).unwrap_err();
    assert_eq!(invoked.load(Ordering::SeqCst), 0);
    assert_eq!(
        err.to_string(),
        "Service operation echo failed due to validation errors: \n\nrejected \n"
    );
}

#[test]
fn text_format_is_selected_from_configuration() {
    let mut config = config::test_config();
    config.validation.fault_format = FaultFormat::Text;
    let dispatcher = build_dispatcher(&config).unwrap();

    let err = dispatcher
        .dispatch("register_account", Some(&json!({"username": "al", "email": "a@b.io", "age": 40})))
        .unwrap_err();
    let AppError::ValidationFailed(fault) = &err else {
        panic!("expected validation failure");
    };
    assert!(fault.message.starts_with("Service operation register_account failed"));
    assert!(fault.message.contains("username: username must be between 3 and 32 characters \n"));
    assert_eq!(fault.details, Value::Null);
}

#[test]
fn generator_sees_the_full_aggregate_once() {
    let first = Arc::new(
        ScriptedValidator::new("first")
            .on("a", vec![ValidationFailure::new("x", "a.x")])
            .on("b", vec![ValidationFailure::new("y", "b.y")]),
    );
    let second = Arc::new(ScriptedValidator::new("second").on("a", vec![ValidationFailure::object("a whole")]));
    let generator = RecordingGenerator::new();

    let inspector = ValidatingParameterInspector::builder()
        .validator(first.clone())
        .validator(second.clone())
        .message_generator(generator.clone())
        .build()
        .unwrap();

    let (a, b) = (Labeled("a"), Labeled("b"));
    let inputs = [arg(&a), None, arg(&b)];
    let outcome = inspector.inspect(&CallContext::new("op", &inputs)).unwrap();

    assert!(!outcome.is_proceed());
    assert_eq!(generator.count(), 1);
    let (operation, failures) = generator.invocations.lock().unwrap()[0].clone();
    assert_eq!(operation, "op");
    let messages: Vec<&str> = failures.iter().map(|f| f.message()).collect();
    assert_eq!(messages, vec!["a.x", "a whole", "b.y"]);

    // Every validator sees every input, including the null one
    assert_eq!(first.calls(), 3);
    assert_eq!(second.calls(), 3);
}

#[test]
fn default_configuration_renders_json_faults() {
    let config = AppConfig::default();
    assert!(config.validation.enabled);
    assert_eq!(config.validation.fault_format, FaultFormat::Json);
}
