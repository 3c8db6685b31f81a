//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication with the provider endpoints.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde_json::Value;
use tracing::debug;

use snsauth_application::ports::{HttpClient, HttpClientError};
use snsauth_domain::{ProviderResponse, ResponseBody};

/// Content-Type for form-urlencoded data.
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP client implementation using reqwest.
///
/// This is the primary HTTP adapter for snsauth. It wraps `reqwest::Client`
/// and implements the `HttpClient` port from the application layer.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "Snsauth/0.1.0"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent("Snsauth/0.1.0")
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Sends a prepared request and decodes the response.
    async fn dispatch(&self, builder: RequestBuilder) -> Result<ProviderResponse, HttpClientError> {
        let response = builder.send().await.map_err(map_error)?;

        let status_code = response.status();
        let status = status_code.as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);

        let text = response
            .text()
            .await
            .map_err(|e| HttpClientError::Body(e.to_string()))?;

        if !status_code.is_success() {
            return Err(HttpClientError::Status { status, body: text });
        }

        debug!(status, "provider endpoint answered");
        Ok(ProviderResponse::new(
            status,
            decode_body(content_type.as_deref(), text),
        ))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_client(Client::new()))
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(
        &self,
        url: &str,
        query: &BTreeMap<String, String>,
    ) -> Result<ProviderResponse, HttpClientError> {
        let url = parse_url(url)?;
        self.dispatch(self.client.get(url).query(query)).await
    }

    async fn post_form(
        &self,
        url: &str,
        form: &BTreeMap<String, String>,
    ) -> Result<ProviderResponse, HttpClientError> {
        let url = parse_url(url)?;
        let body = serde_urlencoded::to_string(form)
            .map_err(|e| HttpClientError::Other(format!("failed to encode form: {e}")))?;

        self.dispatch(
            self.client
                .post(url)
                .header("Content-Type", FORM_CONTENT_TYPE)
                .body(body),
        )
        .await
    }
}

/// Parses a request URL, keeping the original text in the error.
fn parse_url(url: &str) -> Result<Url, HttpClientError> {
    Url::parse(url).map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {url}")))
}

/// Decodes the response body per the port contract.
///
/// Payloads the server declared as JSON are decoded when they parse;
/// everything else stays raw text, QQ's JSONP payloads among them.
fn decode_body(content_type: Option<&str>, text: String) -> ResponseBody {
    if content_type.is_some_and(is_json) {
        if let Ok(value) = serde_json::from_str::<Value>(&text) {
            return ResponseBody::Json(value);
        }
    }
    ResponseBody::Text(text)
}

/// Returns true if the content type declares JSON.
fn is_json(content_type: &str) -> bool {
    content_type.contains("application/json") || content_type.contains("+json")
}

/// Maps reqwest errors to the port's `HttpClientError`.
fn map_error(error: reqwest::Error) -> HttpClientError {
    if error.is_timeout() {
        return HttpClientError::Timeout;
    }

    if error.is_connect() {
        return HttpClientError::ConnectionFailed(error.to_string());
    }

    HttpClientError::Other(error.to_string())
}
