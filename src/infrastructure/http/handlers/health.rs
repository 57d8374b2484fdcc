//! Health check handler module

use crate::{config::AppConfig, infrastructure::dispatch::ServiceDispatcher};
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Reply;

/// Report liveness, served operations and whether validation is attached
pub async fn handle_health_request(
    dispatcher: Arc<ServiceDispatcher>,
    config: AppConfig,
) -> Result<impl Reply, Infallible> {
    Ok(warp::reply::json(&json!({
        "status": "healthy",
        "operations": dispatcher.operation_names(),
        "validation": {
            "enabled": config.validation.enabled,
            "inspectors": dispatcher.inspector_count(),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    })))
}
