//! HTTP route handlers module

pub mod health;
pub mod rpc;

pub use health::handle_health_request;
pub use rpc::{handle_rejection, handle_rpc_request};
