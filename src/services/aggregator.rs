//! Merges people references into resolved actor records.

use std::sync::Arc;

use futures::future::try_join_all;
use tracing::{debug, instrument};

use crate::domain::errors::DomainResult;
use crate::domain::models::{Actor, Film};
use crate::domain::ports::CatalogClient;

/// Resolves each film's people references through the catalog.
///
/// Films are processed one after another in the order given. Within a film,
/// one lookup per reference URL is in flight at the same time and the
/// results are concatenated in reference order, so a URL that yields
/// several actors contributes them all at its own position.
///
/// The first failing lookup fails the whole call; no partial result is
/// produced. Sibling lookups still in flight are dropped at that point.
pub struct Aggregator {
    catalog: Arc<dyn CatalogClient>,
}

impl Aggregator {
    pub fn new(catalog: Arc<dyn CatalogClient>) -> Self {
        Self { catalog }
    }

    /// Resolve every film, returning them in input order with `actors` set.
    #[instrument(skip_all, fields(films = films.len()))]
    pub async fn combine(&self, films: Vec<Film>) -> DomainResult<Vec<Film>> {
        let mut combined = Vec::with_capacity(films.len());
        for film in films {
            let actors = self.resolve_actors(&film).await?;
            debug!(film_id = %film.id, actors = actors.len(), "resolved film cast");
            combined.push(film.with_actors(actors));
        }
        Ok(combined)
    }

    /// Fan out one lookup per reference URL and flatten the results.
    async fn resolve_actors(&self, film: &Film) -> DomainResult<Vec<Actor>> {
        let references = film.references();
        if references.is_empty() {
            return Ok(Vec::new());
        }

        let lookups = references.iter().map(|url| self.catalog.fetch_actor(url));
        let per_url = try_join_all(lookups).await?;

        Ok(per_url.into_iter().flatten().collect())
    }
}

impl std::fmt::Debug for Aggregator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Aggregator").finish_non_exhaustive()
    }
}
