//! HTTP server implementation
//!
//! Serves the JSON-RPC endpoint backed by the service dispatcher.

use crate::{
    application::account_service::build_dispatcher,
    config::AppConfig,
    infrastructure::{dispatch::ServiceDispatcher, http::routes::RouteBuilder},
    shared::error::{AppError, AppResult},
};
use std::sync::Arc;
use tracing::{info, instrument};
use warp::{Filter, Reply};

/// HTTP server for the guarded JSON-RPC service
pub struct HttpServer {
    config: AppConfig,
    dispatcher: Arc<ServiceDispatcher>,
}

impl HttpServer {
    /// Create a server for the account service described by `config`
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let dispatcher = Arc::new(build_dispatcher(&config)?);
        Ok(Self::with_dispatcher(config, dispatcher))
    }

    /// Create a server around an already configured dispatcher
    pub fn with_dispatcher(config: AppConfig, dispatcher: Arc<ServiceDispatcher>) -> Self {
        Self { config, dispatcher }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the HTTP server until the process is stopped
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr: std::net::SocketAddr = self
            .config
            .server_address()
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        info!(
            address = %addr,
            operations = ?self.dispatcher.operation_names(),
            validation = self.config.validation.enabled,
            "Starting HTTP server"
        );

        let routes = self.create_routes();
        warp::serve(routes).run(addr).await;

        Ok(())
    }

    fn create_routes(self) -> impl Filter<Extract = (impl Reply,), Error = std::convert::Infallible> + Clone {
        RouteBuilder::build_routes(self.config, self.dispatcher)
    }
}
