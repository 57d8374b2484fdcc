//! Route builder module
//!
//! This module contains the route builder that combines all application routes.

use crate::{
    config::AppConfig,
    infrastructure::{
        dispatch::ServiceDispatcher,
        http::{
            handlers::handle_rejection,
            routes::{HealthRoutes, RpcRoutes},
        },
    },
};
use std::sync::Arc;
use warp::Filter;

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes
    pub fn build_routes(
        config: AppConfig,
        dispatcher: Arc<ServiceDispatcher>,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = std::convert::Infallible> + Clone {
        let rpc_route = RpcRoutes::create_rpc_route(config.clone(), dispatcher.clone());
        let health_route = HealthRoutes::create_health_route(config, dispatcher);

        rpc_route.or(health_route).recover(handle_rejection)
    }
}
