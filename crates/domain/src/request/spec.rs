//! Verification request descriptor

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::Url;

use super::HttpMethod;
use crate::config::ValidatorConfig;
use crate::error::{DomainError, DomainResult};
use crate::provider::Provider;

/// Grant type sent to the WeChat refresh endpoint.
const WECHAT_GRANT_TYPE: &str = "refresh_token";

/// Specification for a single verification request.
///
/// A fresh descriptor is built for every verification call and handed to
/// the transport; descriptors are never shared or mutated between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRequest {
    /// Target endpoint URL.
    pub url: String,
    /// HTTP method the endpoint expects.
    pub method: HttpMethod,
    /// Request parameters, sent as the query string for GET requests and
    /// as a form-encoded body for POST requests.
    pub params: BTreeMap<String, String>,
}

impl TokenRequest {
    /// Builds the verification request for a configuration and an access
    /// token.
    ///
    /// QQ and Weibo take the token as `access_token`; WeChat takes the
    /// configured `appid` together with `grant_type` and `refresh_token`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingAppId`] if the provider requires an
    /// application id and the configuration has none.
    pub fn build(config: &ValidatorConfig, access_token: &str) -> DomainResult<Self> {
        let provider = config.provider;
        let mut params = BTreeMap::new();

        match provider {
            Provider::Qq | Provider::Weibo => {
                params.insert("access_token".to_string(), access_token.to_string());
            }
            Provider::Wechat => {
                let app_id = config
                    .app_id
                    .as_deref()
                    .ok_or_else(|| DomainError::MissingAppId(provider))?;
                params.insert("appid".to_string(), app_id.to_string());
                params.insert("grant_type".to_string(), WECHAT_GRANT_TYPE.to_string());
                params.insert("refresh_token".to_string(), access_token.to_string());
            }
        }

        Ok(Self {
            url: provider.endpoint().to_string(),
            method: provider.method(),
            params,
        })
    }

    /// Validates the URL and returns the parsed version if valid.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is malformed.
    pub fn parse_url(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.url)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_build_weibo_request() {
        let config = ValidatorConfig::new(Provider::Weibo);
        let request = TokenRequest::build(&config, "2.00abcdef").unwrap();

        assert_eq!(request.url, "https://api.weibo.com/oauth2/get_token_info");
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.params, params(&[("access_token", "2.00abcdef")]));
    }

    #[test]
    fn test_build_qq_request() {
        let config = ValidatorConfig::new(Provider::Qq);
        let request = TokenRequest::build(&config, "FE04************CCE2").unwrap();

        assert_eq!(request.url, "https://graph.qq.com/oauth2.0/me");
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.params,
            params(&[("access_token", "FE04************CCE2")])
        );
    }

    #[test]
    fn test_build_wechat_request() {
        let config = ValidatorConfig::with_app_id(Provider::Wechat, "wx1093f8d7a911a1ef");
        let request = TokenRequest::build(&config, "refresh-me").unwrap();

        assert_eq!(
            request.url,
            "https://api.weixin.qq.com/sns/oauth2/refresh_token"
        );
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(
            request.params,
            params(&[
                ("appid", "wx1093f8d7a911a1ef"),
                ("grant_type", "refresh_token"),
                ("refresh_token", "refresh-me"),
            ])
        );
    }

    #[test]
    fn test_build_wechat_without_app_id() {
        let config = ValidatorConfig::new(Provider::Wechat);
        let result = TokenRequest::build(&config, "refresh-me");

        assert_eq!(result, Err(DomainError::MissingAppId(Provider::Wechat)));
    }

    #[test]
    fn test_build_ignores_app_id_for_other_providers() {
        let config = ValidatorConfig::with_app_id(Provider::Qq, "100229475");
        let request = TokenRequest::build(&config, "token").unwrap();

        assert_eq!(request.params, params(&[("access_token", "token")]));
    }

    #[test]
    fn test_built_requests_parse_as_urls() {
        for provider in Provider::all() {
            let config = ValidatorConfig::with_app_id(*provider, "appid");
            let request = TokenRequest::build(&config, "token").unwrap();
            assert!(request.parse_url().is_ok());
        }
    }

    #[test]
    fn test_fresh_descriptor_per_call() {
        let config = ValidatorConfig::new(Provider::Weibo);
        let first = TokenRequest::build(&config, "first").unwrap();
        let second = TokenRequest::build(&config, "second").unwrap();

        assert_eq!(first.params, params(&[("access_token", "first")]));
        assert_eq!(second.params, params(&[("access_token", "second")]));
    }
}
