//! Shared-secret access gate.

use constant_time_eq::constant_time_eq;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::AuthConfig;

/// Checks the pre-shared secret carried by every inbound request.
///
/// The presented value must equal the configured secret byte for byte;
/// a missing header and any difference (case included) are rejected alike.
#[derive(Clone)]
pub struct AccessGate {
    header: String,
    secret: String,
}

impl AccessGate {
    pub fn new(header: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            secret: secret.into(),
        }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.header.clone(), config.api_key.clone())
    }

    /// Name of the header the secret is read from.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Accept only an exact match of the configured secret.
    ///
    /// Equal-length values are compared in constant time.
    pub fn verify(&self, presented: Option<&[u8]>) -> DomainResult<()> {
        let expected = self.secret.as_bytes();
        match presented {
            Some(value) if value.len() == expected.len() && constant_time_eq(value, expected) => {
                Ok(())
            }
            _ => Err(DomainError::Unauthorized),
        }
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("header", &self.header)
            .field("secret", &"<redacted>")
            .finish()
    }
}
