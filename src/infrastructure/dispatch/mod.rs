//! Host dispatch pipeline
//!
//! A minimal operation dispatcher that drives parameter inspectors through
//! their `before_call`/`after_call` lifecycle.

pub mod dispatcher;
pub mod operation;

pub use dispatcher::ServiceDispatcher;
pub use operation::{BoxedArgument, JsonArgsOperation, ServiceOperation, TypedOperation};
