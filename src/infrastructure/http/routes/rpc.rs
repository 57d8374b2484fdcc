//! RPC routes module

use crate::{
    config::AppConfig,
    infrastructure::{
        dispatch::ServiceDispatcher,
        http::{
            handlers::handle_rpc_request,
            utils::with_dispatcher,
        },
    },
};
use std::sync::Arc;
use warp::Filter;

/// RPC routes configuration
pub struct RpcRoutes;

impl RpcRoutes {
    /// Create the main RPC endpoint route
    pub fn create_rpc_route(
        config: AppConfig,
        dispatcher: Arc<ServiceDispatcher>,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        warp::path::end()
            .and(warp::post())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::json())
            .and(with_dispatcher(dispatcher))
            .and_then(handle_rpc_request)
    }
}
