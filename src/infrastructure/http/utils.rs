//! HTTP utilities - Filter injection helpers

use crate::config::AppConfig;
use crate::infrastructure::dispatch::ServiceDispatcher;
use std::sync::Arc;
use warp::Filter;

/// Inject the dispatcher into a route
pub fn with_dispatcher(
    dispatcher: Arc<ServiceDispatcher>,
) -> impl Filter<Extract = (Arc<ServiceDispatcher>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || dispatcher.clone())
}

/// Inject the configuration into a route
pub fn with_config(config: AppConfig) -> impl Filter<Extract = (AppConfig,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || config.clone())
}
