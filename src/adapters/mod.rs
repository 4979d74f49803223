//! Infrastructure adapters for external systems.

pub mod cache;
pub mod catalog;
pub mod http;
