pub mod actor;
pub mod config;
pub mod film;
pub mod reference;

pub use actor::Actor;
pub use config::{AuthConfig, CacheConfig, CatalogConfig, Config, LoggingConfig, ServerConfig};
pub use film::{Cast, Film};
