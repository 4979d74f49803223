//! Domain errors for the Ghibli cast aggregator.

use thiserror::Error;

/// Domain-level errors that can occur while serving the aggregate.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No or invalid API key provided")]
    Unauthorized,

    #[error("Upstream {url} returned {status}")]
    UpstreamStatus { url: String, status: u16 },

    #[error("Upstream request failed: {0}")]
    UpstreamTransport(String),

    #[error("Invalid upstream record: {0}")]
    InvalidRecord(String),

    #[error("Unexpected payload shape from {url}: expected an object or an array of objects")]
    UnexpectedPayload { url: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Whether the failure came from the upstream catalog (status, transport or record shape).
    pub const fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamStatus { .. }
                | Self::UpstreamTransport(_)
                | Self::InvalidRecord(_)
                | Self::UnexpectedPayload { .. }
        )
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<reqwest::Error> for DomainError {
    fn from(err: reqwest::Error) -> Self {
        match (err.status(), err.url()) {
            (Some(status), Some(url)) => Self::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            },
            _ => Self::UpstreamTransport(err.to_string()),
        }
    }
}
