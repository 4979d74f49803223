//! Film records as served by the catalog and as emitted after aggregation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::actor::Actor;
use super::reference;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::strip_empty_references;

/// Who appears in a film.
///
/// Upstream records only carry `people` reference URLs. Aggregation swaps
/// them for resolved `actors`, so a serialized film has exactly one of the
/// two keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cast {
    People(#[serde(deserialize_with = "reference::url_list")] Vec<Url>),
    Actors(Vec<Actor>),
}

/// A film from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub id: String,
    pub title: String,
    pub original_title: String,
    pub original_title_romanised: String,
    pub image: Url,
    pub movie_banner: Url,
    pub description: String,
    pub director: String,
    pub producer: String,
    pub release_date: String,
    pub running_time: String,
    #[serde(default)]
    pub rt_score: Option<String>,
    #[serde(flatten)]
    pub cast: Cast,
    #[serde(default, deserialize_with = "reference::optional_url_list")]
    pub species: Option<Vec<Url>>,
    #[serde(default, deserialize_with = "reference::optional_url_list")]
    pub locations: Option<Vec<Url>>,
    #[serde(default, deserialize_with = "reference::optional_url_list")]
    pub vehicles: Option<Vec<Url>>,
    pub url: Url,
}

impl Film {
    /// Build a film from one raw upstream object.
    pub fn from_raw(raw: Value) -> DomainResult<Self> {
        let Value::Object(mut record) = raw else {
            return Err(DomainError::InvalidRecord(
                "film record is not a JSON object".to_string(),
            ));
        };
        strip_empty_references(&mut record);
        if !record.contains_key("actors") {
            let people = record.entry("people").or_insert(Value::Null);
            if people.is_null() {
                *people = Value::Array(Vec::new());
            }
        }
        serde_json::from_value(Value::Object(record))
            .map_err(|e| DomainError::InvalidRecord(format!("film: {e}")))
    }

    /// People reference URLs still waiting to be resolved.
    pub fn references(&self) -> &[Url] {
        match &self.cast {
            Cast::People(urls) => urls,
            Cast::Actors(_) => &[],
        }
    }

    /// Resolved actors, once aggregation has run.
    pub fn actors(&self) -> Option<&[Actor]> {
        match &self.cast {
            Cast::People(_) => None,
            Cast::Actors(actors) => Some(actors),
        }
    }

    /// Replace the people references with resolved actors.
    #[must_use]
    pub fn with_actors(mut self, actors: Vec<Actor>) -> Self {
        self.cast = Cast::Actors(actors);
        self
    }
}
