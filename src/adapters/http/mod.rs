//! Inbound HTTP adapter.

pub mod server;

pub use server::{router, ApiError, AppState, MoviesHttpServer};
