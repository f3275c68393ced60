//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// Per-city load failures never show up here; they settle the affected
/// slide instead. These errors abort dashboard construction as a whole.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The dashboard was asked to show no cities at all
    #[error("No cities configured")]
    NoCities,

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}
