//! Validator configuration

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::provider::Provider;

/// Immutable configuration for a token validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Provider whose tokens are verified.
    pub provider: Provider,
    /// Application id registered with the provider.
    ///
    /// Required by WeChat, whose refresh endpoint takes the `appid`
    /// parameter. QQ and Weibo ignore it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
}

impl ValidatorConfig {
    /// Creates a configuration without an application id.
    #[must_use]
    pub const fn new(provider: Provider) -> Self {
        Self {
            provider,
            app_id: None,
        }
    }

    /// Creates a configuration with an application id.
    #[must_use]
    pub fn with_app_id(provider: Provider, app_id: impl Into<String>) -> Self {
        Self {
            provider,
            app_id: Some(app_id.into()),
        }
    }

    /// Checks that the configuration satisfies the provider's requirements.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingAppId`] if the provider requires an
    /// application id and none is set.
    pub fn validate(&self) -> DomainResult<()> {
        if self.provider.requires_app_id() && self.app_id.is_none() {
            return Err(DomainError::MissingAppId(self.provider));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_validate_accepts_provider_without_app_id() {
        assert_eq!(ValidatorConfig::new(Provider::Qq).validate(), Ok(()));
        assert_eq!(ValidatorConfig::new(Provider::Weibo).validate(), Ok(()));
    }

    #[test]
    fn test_validate_requires_wechat_app_id() {
        let config = ValidatorConfig::new(Provider::Wechat);
        assert_eq!(
            config.validate(),
            Err(DomainError::MissingAppId(Provider::Wechat))
        );
    }

    #[test]
    fn test_validate_accepts_wechat_with_app_id() {
        let config = ValidatorConfig::with_app_id(Provider::Wechat, "wx1093f8d7a911a1ef");
        assert_eq!(config.validate(), Ok(()));
    }
}
