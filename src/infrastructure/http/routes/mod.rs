//! HTTP routes module

pub mod builder;
pub mod health;
pub mod rpc;

pub use builder::RouteBuilder;
pub use health::HealthRoutes;
pub use rpc::RpcRoutes;
