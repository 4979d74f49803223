use serde::{Deserialize, Serialize};

/// Main configuration structure for the aggregator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Inbound HTTP listener
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream catalog
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Shared key-value cache
    #[serde(default)]
    pub cache: CacheConfig,

    /// Shared-secret access gate
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Upstream catalog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CatalogConfig {
    /// Film-list endpoint
    #[serde(default = "default_films_url")]
    pub films_url: String,

    /// User-Agent sent with every upstream request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_films_url() -> String {
    "https://ghibli.rest/films".to_string()
}

fn default_user_agent() -> String {
    concat!("ghibli-cast/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            films_url: default_films_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// Store-wide cache eviction policy.
///
/// Keys are written without a per-entry expiry; these two knobs are the
/// store's own policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CacheConfig {
    /// Time-to-live for every entry in seconds (0 = never expire)
    #[serde(default = "default_cache_ttl_secs")]
    pub ttl_secs: u64,

    /// Maximum number of entries held at once
    #[serde(default = "default_cache_max_entries")]
    pub max_entries: u64,
}

const fn default_cache_ttl_secs() -> u64 {
    300
}

const fn default_cache_max_entries() -> u64 {
    300
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl_secs(),
            max_entries: default_cache_max_entries(),
        }
    }
}

/// Shared-secret access gate configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AuthConfig {
    /// Header carrying the pre-shared secret
    #[serde(default = "default_auth_header")]
    pub header: String,

    /// The pre-shared secret (required, no default)
    #[serde(default)]
    pub api_key: String,
}

fn default_auth_header() -> String {
    "Ghiblikey".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            header: default_auth_header(),
            api_key: String::new(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for daily-rotated log files; console only when unset
    #[serde(default)]
    pub log_dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
        }
    }
}
