//! Health routes module

use crate::{
    config::AppConfig,
    infrastructure::{
        dispatch::ServiceDispatcher,
        http::{
            handlers::handle_health_request,
            utils::{with_config, with_dispatcher},
        },
    },
};
use std::sync::Arc;
use warp::Filter;

/// Health routes configuration
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create the health check endpoint route
    pub fn create_health_route(
        config: AppConfig,
        dispatcher: Arc<ServiceDispatcher>,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        warp::path("health")
            .and(warp::path::end())
            .and(warp::get())
            .and(with_dispatcher(dispatcher))
            .and(with_config(config))
            .and_then(handle_health_request)
    }
}
