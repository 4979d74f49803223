//! Lenient deserializers for reference URLs.
//!
//! A reference that is not a well-formed http(s) URL is dropped rather than
//! failing the whole record: the entity simply has no such reference.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use url::Url;

fn parse_reference(value: &Value) -> Option<Url> {
    let raw = value.as_str()?;
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        _ => {
            tracing::debug!(reference = raw, "discarding malformed reference URL");
            None
        }
    }
}

/// A single optional reference URL.
pub fn optional_url<'de, D>(deserializer: D) -> Result<Option<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(parse_reference))
}

/// A list of reference URLs; `null` reads as an empty list.
pub fn url_list<'de, D>(deserializer: D) -> Result<Vec<Url>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .iter()
        .filter_map(parse_reference)
        .collect())
}

/// An optional list of reference URLs carried through untouched.
pub fn optional_url_list<'de, D>(deserializer: D) -> Result<Option<Vec<Url>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?;
    Ok(raw.map(|items| items.iter().filter_map(parse_reference).collect()))
}
