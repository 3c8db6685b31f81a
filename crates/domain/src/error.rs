//! Domain error types

use thiserror::Error;

use crate::provider::Provider;

/// Domain-level errors that can occur while building verification requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provider name is not one of the supported services.
    #[error("unknown provider: {0}")]
    UnknownProvider(String),

    /// The provider requires an application id and none was configured.
    #[error("missing app id for provider: {0}")]
    MissingAppId(Provider),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
