//! Actor (person) records resolved from film reference URLs.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use super::reference;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::validation::strip_empty_references;

/// A person appearing in a film.
///
/// `url` is the canonical self-reference and doubles as the cache key for
/// the lookup that produced this record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "reference::optional_url")]
    pub species: Option<Url>,
    pub url: Url,
}

impl Actor {
    /// Build an actor from one raw upstream object.
    pub fn from_raw(raw: Value) -> DomainResult<Self> {
        let Value::Object(mut record) = raw else {
            return Err(DomainError::InvalidRecord(
                "actor record is not a JSON object".to_string(),
            ));
        };
        strip_empty_references(&mut record);
        serde_json::from_value(Value::Object(record))
            .map_err(|e| DomainError::InvalidRecord(format!("actor: {e}")))
    }

    /// Decode a raw people payload into actor records.
    ///
    /// The people endpoint answers either with a single object or with an
    /// array of objects; both normalize to a list. Any other shape is
    /// rejected.
    pub fn from_payload(source: &str, payload: &Value) -> DomainResult<Vec<Self>> {
        match payload {
            Value::Object(_) => Ok(vec![Self::from_raw(payload.clone())?]),
            Value::Array(items) => {
                if !items.iter().all(Value::is_object) {
                    return Err(DomainError::UnexpectedPayload {
                        url: source.to_string(),
                    });
                }
                items.iter().cloned().map(Self::from_raw).collect()
            }
            _ => Err(DomainError::UnexpectedPayload {
                url: source.to_string(),
            }),
        }
    }
}
