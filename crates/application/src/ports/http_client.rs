//! HTTP Client port

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use snsauth_domain::ProviderResponse;

/// Errors surfaced by HTTP client implementations.
///
/// Token verification treats these as transport failures and propagates
/// them verbatim; nothing here is retried or reinterpreted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request timed out.
    #[error("request timed out")]
    Timeout,

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The server answered with a non-success status.
    #[error("HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body text.
        body: String,
    },

    /// The response body could not be read.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other client failure.
    #[error("{0}")]
    Other(String),
}

/// Port for issuing provider verification requests.
///
/// This trait abstracts the HTTP client implementation, allowing the
/// application layer to be independent of specific HTTP libraries. Both
/// operations return the body JSON-decoded when the server declared a JSON
/// content type and the payload parses, else as raw text. Non-success
/// statuses are reported as [`HttpClientError::Status`], not as responses.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Issues a GET request carrying the parameters as the query string.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or a non-success status.
    async fn get(
        &self,
        url: &str,
        query: &BTreeMap<String, String>,
    ) -> Result<ProviderResponse, HttpClientError>;

    /// Issues a POST request carrying the parameters as a form-encoded
    /// body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails due to network issues,
    /// timeout, or a non-success status.
    async fn post_form(
        &self,
        url: &str,
        form: &BTreeMap<String, String>,
    ) -> Result<ProviderResponse, HttpClientError>;
}
