//! Upstream film catalog port.

use async_trait::async_trait;
use url::Url;

use crate::domain::errors::DomainResult;
use crate::domain::models::{Actor, Film};

/// Read access to the remote film catalog.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Fetch the full film list, in catalog order.
    async fn fetch_films(&self) -> DomainResult<Vec<Film>>;

    /// Resolve one people reference URL into the actor record(s) it names.
    ///
    /// A single URL may yield several actors (the people collection endpoint
    /// answers with an array).
    async fn fetch_actor(&self, url: &Url) -> DomainResult<Vec<Actor>>;
}
