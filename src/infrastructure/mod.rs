//! Infrastructure layer
//!
//! Concrete validators and fault renderers, the dispatch pipeline that drives
//! parameter inspectors, and the HTTP surface in front of it.

pub mod adapters;
pub mod dispatch;
pub mod http;
