use anyhow::{Context, Result};
use axum::http::HeaderName;
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;
use url::Url;

use crate::domain::models::config::Config;

/// Environment variable prefix; `__` separates nested keys.
pub const ENV_PREFIX: &str = "GHIBLI_CAST_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("API key is required (set auth.api_key or GHIBLI_CAST_AUTH__API_KEY)")]
    MissingApiKey,

    #[error("Invalid auth header name: {0:?}")]
    InvalidAuthHeader(String),

    #[error("Invalid films_url: {0}. Must be an absolute http(s) URL")]
    InvalidFilmsUrl(String),

    #[error("Invalid port: {0}. Must be non-zero")]
    InvalidPort(u16),

    #[error("Invalid cache max_entries: {0}. Must be at least 1")]
    InvalidMaxEntries(u64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .ghibli-cast/config.yaml (project config)
    /// 3. .ghibli-cast/local.yaml (local overrides, optional)
    /// 4. Environment variables (GHIBLI_CAST_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(".ghibli-cast/config.yaml"))
            .merge(Yaml::file(".ghibli-cast/local.yaml"))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring environment overrides
    pub fn load_from_file(path: impl AsRef<std::path::Path>) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context(format!(
                "Failed to load config from {}",
                path.as_ref().display()
            ))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.auth.api_key.is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        if config.auth.header.is_empty()
            || HeaderName::from_bytes(config.auth.header.as_bytes()).is_err()
        {
            return Err(ConfigError::InvalidAuthHeader(config.auth.header.clone()));
        }

        match Url::parse(&config.catalog.films_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            _ => return Err(ConfigError::InvalidFilmsUrl(config.catalog.films_url.clone())),
        }

        if config.server.port == 0 {
            return Err(ConfigError::InvalidPort(config.server.port));
        }

        if config.cache.max_entries == 0 {
            return Err(ConfigError::InvalidMaxEntries(config.cache.max_entries));
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        Ok(())
    }
}
