//! Domain layer for the Ghibli cast aggregator
//!
//! Film and actor models, raw-record validation, errors and the port traits
//! the services are written against.

pub mod errors;
pub mod models;
pub mod ports;
pub mod validation;

pub use errors::{DomainError, DomainResult};
