//! Concurrency tests for a shared dispatcher and inspector

use crate::{
    application::account_service::build_dispatcher,
    tests::config,
};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};

const CONCURRENCY: usize = 16;
const ITERATIONS: usize = 50;

#[tokio::test]
async fn concurrent_calls_get_independent_verdicts() {
    config::init();
    let dispatcher = Arc::new(build_dispatcher(&config::test_config()).unwrap());

    let mut handles = Vec::with_capacity(CONCURRENCY);
    for worker in 0..CONCURRENCY {
        let dispatcher = dispatcher.clone();
        handles.push(tokio::spawn(async move {
            let mut rejected = 0usize;
            for i in 0..ITERATIONS {
                // Odd calls break the username rule
                let username = if (worker + i) % 2 == 0 {
                    format!("user_{}_{}", worker, i)
                } else {
                    "x".to_string()
                };
                let params = json!({"username": username, "email": "u@example.com", "age": 30});
                match dispatcher.dispatch("register_account", Some(&params)) {
                    Ok(result) => assert_eq!(result["username"], json!(username)),
                    Err(e) => {
                        assert!(e.is_validation_failure());
                        assert_eq!(e.to_jsonrpc_error()["data"]["errors"].as_array().unwrap().len(), 1);
                        rejected += 1;
                    }
                }
            }
            rejected
        }));
    }

    let mut total_rejected = 0usize;
    for handle in handles {
        total_rejected += handle.await.unwrap();
    }
    assert_eq!(total_rejected, CONCURRENCY * ITERATIONS / 2);
}

#[test]
fn validation_overhead_stays_small() {
    let dispatcher = build_dispatcher(&config::test_config()).unwrap();
    let params = json!([
        {"account": "alice", "amount": 10, "currency": "USD"},
        {"account": "bob_1", "amount": 10}
    ]);

    let start = Instant::now();
    for _ in 0..1_000 {
        dispatcher.dispatch("transfer", Some(&params)).unwrap();
    }
    assert!(start.elapsed() < Duration::from_secs(5));
}
