//! Cross-module test suite
//!
//! - Integration tests driving the dispatcher and inspector together
//! - Concurrency tests for shared inspector use
//! - Shared fixtures and scripted collaborators

pub mod common;
pub mod integration;
pub mod performance;

/// Test configuration and utilities
pub mod config {
    use crate::config::AppConfig;
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize test environment
    pub fn init() {
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter("debug")
                .with_test_writer()
                .try_init();
        });
    }

    /// Create test configuration
    pub fn test_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config
    }
}
