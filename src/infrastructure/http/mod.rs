//! HTTP infrastructure module
//!
//! This module contains the JSON-RPC models, handlers, routes and server.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod utils;

pub use models::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RequestContext};
pub use server::HttpServer;
