//! Ghibli catalog HTTP client.
//!
//! Fetches the film list and individual people records from the public
//! catalog API. People lookups go through the shared [`CacheStore`] first:
//! the raw decoded body is cached under the reference URL, so an actor that
//! appears in several films is fetched once per cache lifetime.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{Actor, CatalogConfig, Film};
use crate::domain::ports::{CacheStore, CatalogClient};
use crate::domain::validation::is_truthy;

/// Default film-list endpoint.
pub const FILMS_URL: &str = "https://ghibli.rest/films";

/// HTTP client for the Ghibli catalog API.
///
/// All methods return [`DomainResult`]; a non-success status or a transport
/// error fails the call immediately with no retry.
#[derive(Clone)]
pub struct GhibliClient {
    /// The underlying HTTP client.
    http: Client,
    /// Film-list endpoint.
    films_url: String,
    /// Shared store for raw people payloads, keyed by reference URL.
    cache: Arc<dyn CacheStore>,
}

impl GhibliClient {
    /// Create a client against the public catalog.
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self {
            http: Client::new(),
            films_url: FILMS_URL.to_string(),
            cache,
        }
    }

    /// Create a client from configuration.
    pub fn from_config(config: &CatalogConfig, cache: Arc<dyn CacheStore>) -> DomainResult<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| DomainError::UpstreamTransport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            films_url: config.films_url.clone(),
            cache,
        })
    }

    /// Point the client at a different film-list endpoint.
    #[must_use]
    pub fn with_films_url(mut self, films_url: impl Into<String>) -> Self {
        self.films_url = films_url.into();
        self
    }

    /// The film-list endpoint in use.
    pub fn films_url(&self) -> &str {
        &self.films_url
    }

    /// GET a URL and decode the body as JSON, failing on non-success status.
    async fn get_json(&self, url: &str) -> DomainResult<Value> {
        let resp = self.http.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "catalog returned error status");
            return Err(DomainError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(resp.json::<Value>().await?)
    }
}

impl std::fmt::Debug for GhibliClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GhibliClient")
            .field("films_url", &self.films_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl CatalogClient for GhibliClient {
    async fn fetch_films(&self) -> DomainResult<Vec<Film>> {
        let body = self.get_json(&self.films_url).await?;

        let Value::Array(records) = body else {
            return Err(DomainError::UnexpectedPayload {
                url: self.films_url.clone(),
            });
        };

        let films = records
            .into_iter()
            .map(Film::from_raw)
            .collect::<DomainResult<Vec<_>>>()?;

        tracing::info!(count = films.len(), url = %self.films_url, "fetched film list");
        Ok(films)
    }

    async fn fetch_actor(&self, url: &Url) -> DomainResult<Vec<Actor>> {
        let key = url.as_str();

        if let Some(cached) = self.cache.get(key).await? {
            if is_truthy(&cached) {
                tracing::debug!(url = key, "people cache hit");
                return Actor::from_payload(key, &cached);
            }
        }

        tracing::debug!(url = key, "people cache miss");
        let payload = self.get_json(key).await?;
        self.cache.set(key, payload.clone()).await?;

        Actor::from_payload(key, &payload)
    }
}
