//! Service layer: the fetch-merge-cache pipeline and the access gate.

pub mod access_gate;
pub mod aggregator;
pub mod movie_service;

pub use access_gate::AccessGate;
pub use aggregator::Aggregator;
pub use movie_service::{CachedMovies, MovieService, MOVIES_CACHE_KEY};
