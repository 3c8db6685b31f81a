//! Social login providers and their verification endpoints

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DomainError, DomainResult};
use crate::request::HttpMethod;

/// Identity endpoint for QQ Connect.
const QQ_ENDPOINT: &str = "https://graph.qq.com/oauth2.0/me";
/// Token refresh endpoint for the WeChat open platform, used here as an
/// opaque identity lookup.
const WECHAT_ENDPOINT: &str = "https://api.weixin.qq.com/sns/oauth2/refresh_token";
/// Token info endpoint for the Weibo open platform.
const WEIBO_ENDPOINT: &str = "https://api.weibo.com/oauth2/get_token_info";

/// Supported social login providers.
///
/// The provider determines the verification endpoint, the HTTP method it
/// expects, and how the access token is encoded into the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// QQ Connect
    Qq,
    /// WeChat open platform
    Wechat,
    /// Weibo open platform
    Weibo,
}

impl Provider {
    /// Returns all supported providers.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Qq, Self::Wechat, Self::Weibo]
    }

    /// Returns the provider name as a static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Qq => "qq",
            Self::Wechat => "wechat",
            Self::Weibo => "weibo",
        }
    }

    /// Returns the token verification endpoint for this provider.
    #[must_use]
    pub const fn endpoint(self) -> &'static str {
        match self {
            Self::Qq => QQ_ENDPOINT,
            Self::Wechat => WECHAT_ENDPOINT,
            Self::Weibo => WEIBO_ENDPOINT,
        }
    }

    /// Returns the HTTP method the verification endpoint expects.
    ///
    /// Weibo's token info endpoint takes a form-encoded POST; the others
    /// take query parameters on a GET.
    #[must_use]
    pub const fn method(self) -> HttpMethod {
        match self {
            Self::Weibo => HttpMethod::Post,
            Self::Qq | Self::Wechat => HttpMethod::Get,
        }
    }

    /// Returns whether verification requests require an application id.
    #[must_use]
    pub const fn requires_app_id(self) -> bool {
        matches!(self, Self::Wechat)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Provider {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.to_lowercase().as_str() {
            "qq" => Ok(Self::Qq),
            "wechat" => Ok(Self::Wechat),
            "weibo" => Ok(Self::Weibo),
            other => Err(DomainError::UnknownProvider(other.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_provider_from_str() {
        assert_eq!("qq".parse::<Provider>().unwrap(), Provider::Qq);
        assert_eq!("WeChat".parse::<Provider>().unwrap(), Provider::Wechat);
        assert_eq!("weibo".parse::<Provider>().unwrap(), Provider::Weibo);
    }

    #[test]
    fn test_unknown_provider() {
        let result = "xxx".parse::<Provider>();
        assert_eq!(result, Err(DomainError::UnknownProvider("xxx".to_string())));
    }

    #[test]
    fn test_provider_display() {
        assert_eq!(Provider::Qq.to_string(), "qq");
        assert_eq!(Provider::Wechat.to_string(), "wechat");
        assert_eq!(Provider::Weibo.to_string(), "weibo");
    }

    #[test]
    fn test_endpoints() {
        assert_eq!(Provider::Qq.endpoint(), "https://graph.qq.com/oauth2.0/me");
        assert_eq!(
            Provider::Wechat.endpoint(),
            "https://api.weixin.qq.com/sns/oauth2/refresh_token"
        );
        assert_eq!(
            Provider::Weibo.endpoint(),
            "https://api.weibo.com/oauth2/get_token_info"
        );
    }

    #[test]
    fn test_endpoints_are_valid_urls() {
        for provider in Provider::all() {
            assert!(url::Url::parse(provider.endpoint()).is_ok());
        }
    }

    #[test]
    fn test_method_per_provider() {
        assert_eq!(Provider::Weibo.method(), HttpMethod::Post);
        assert_eq!(Provider::Qq.method(), HttpMethod::Get);
        assert_eq!(Provider::Wechat.method(), HttpMethod::Get);
    }

    #[test]
    fn test_requires_app_id() {
        assert!(Provider::Wechat.requires_app_id());
        assert!(!Provider::Qq.requires_app_id());
        assert!(!Provider::Weibo.requires_app_id());
    }
}
