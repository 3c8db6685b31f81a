//! Token validation use case
//!
//! Verifies a third-party access token by asking the issuing provider for
//! the identity behind it and comparing that identity against an expected
//! value.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use snsauth_domain::{DomainError, HttpMethod, TokenRequest, ValidatorConfig};

use crate::ports::{HttpClient, HttpClientError};

/// Result type for token validation.
pub type ValidateResult = Result<bool, ValidateError>;

/// Error type for the token validation use case.
#[derive(Debug, Clone, Error)]
pub enum ValidateError {
    /// The provider name or validator configuration is invalid.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// The provider answered but no identity could be extracted.
    #[error("no identity in provider response: {body}")]
    ProviderResponse {
        /// Raw response body, kept for diagnostics.
        body: String,
    },

    /// The HTTP call itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] HttpClientError),
}

/// Use case for verifying provider access tokens.
///
/// Holds an immutable provider configuration and issues requests through
/// the `HttpClient` port. Every call builds a fresh request descriptor, so
/// one validator instance can serve concurrent validations.
///
/// # Example
///
/// ```ignore
/// let client = Arc::new(ReqwestHttpClient::new()?);
/// let config = ValidatorConfig::new(Provider::Weibo);
/// let validator = TokenValidator::new(config, client)?;
///
/// let valid = validator.validate("2.00abcdef", "1234567890").await?;
/// ```
pub struct TokenValidator<C: HttpClient> {
    config: ValidatorConfig,
    client: Arc<C>,
}

impl<C: HttpClient> TokenValidator<C> {
    /// Creates a validator for the given configuration and HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::Domain`] if the provider requires an
    /// application id and the configuration has none.
    pub fn new(config: ValidatorConfig, client: Arc<C>) -> Result<Self, ValidateError> {
        config.validate()?;
        Ok(Self { config, client })
    }

    /// Returns the validator configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Builds the verification request descriptor for an access token.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::Domain`] if the configuration does not
    /// satisfy the provider's requirements.
    pub fn build_request(&self, access_token: &str) -> Result<TokenRequest, ValidateError> {
        Ok(TokenRequest::build(&self.config, access_token)?)
    }

    /// Verifies an access token against an expected identity.
    ///
    /// Returns `Ok(true)` when the provider reports the expected identity
    /// and `Ok(false)` when it reports a different one; an identity
    /// mismatch is never an error. The comparison is done in canonical
    /// string form, so Weibo's numeric uid matches its decimal string.
    ///
    /// # Errors
    ///
    /// Returns [`ValidateError::ProviderResponse`] when the provider's
    /// answer carries no identity, and [`ValidateError::Transport`] when
    /// the HTTP call fails. Transport errors are propagated verbatim, with
    /// no retries.
    pub async fn validate(&self, access_token: &str, expected_identity: &str) -> ValidateResult {
        let request = self.build_request(access_token)?;

        debug!(
            provider = %self.config.provider,
            method = %request.method,
            url = %request.url,
            "dispatching verification request"
        );

        let response = match request.method {
            HttpMethod::Get => self.client.get(&request.url, &request.params).await?,
            HttpMethod::Post => self.client.post_form(&request.url, &request.params).await?,
        };

        match response.body.extract_identity() {
            Some(identity) => {
                let valid = identity.matches(expected_identity);
                debug!(provider = %self.config.provider, valid, "identity comparison complete");
                Ok(valid)
            }
            None => {
                warn!(
                    provider = %self.config.provider,
                    status = response.status,
                    "provider response carried no identity"
                );
                Err(ValidateError::ProviderResponse {
                    body: response.body.to_string(),
                })
            }
        }
    }
}
