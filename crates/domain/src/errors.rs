//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City name is not part of the carousel roster
    #[error("Unknown city: {0}")]
    UnknownCity(String),

    /// Time zone name is not a known IANA identifier
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

impl DomainError {
    /// Create an unknown city error
    pub fn unknown_city(name: impl Into<String>) -> Self {
        Self::UnknownCity(name.into())
    }
}
