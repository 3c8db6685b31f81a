//! User identity extracted from provider responses

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user identifier in canonical string form.
///
/// Providers return identifiers either as JSON strings (WeChat and QQ
/// `openid`) or as JSON numbers (Weibo `uid`). Both normalize to the same
/// canonical form, so the numeric `123` and the string `"123"` are one
/// identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Identity(String);

impl Identity {
    /// Creates an identity from its string form.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Extracts an identity from a JSON value.
    ///
    /// Strings are taken verbatim and numbers via their decimal rendering;
    /// every other JSON type yields `None`.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }

    /// Returns the canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compares this identity against an expected value.
    ///
    /// The comparison happens in canonical string form, so a numeric Weibo
    /// uid matches its decimal string representation.
    #[must_use]
    pub fn matches(&self, expected: &str) -> bool {
        self.0 == expected
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_string_value() {
        let identity = Identity::from_value(&json!("o6_bmjrPTlm6_2sgVt7hMZOPfL2M")).unwrap();
        assert_eq!(identity.as_str(), "o6_bmjrPTlm6_2sgVt7hMZOPfL2M");
    }

    #[test]
    fn test_from_numeric_value() {
        let identity = Identity::from_value(&json!(123)).unwrap();
        assert_eq!(identity.as_str(), "123");
    }

    #[test]
    fn test_from_other_value_types() {
        assert_eq!(Identity::from_value(&json!(null)), None);
        assert_eq!(Identity::from_value(&json!(true)), None);
        assert_eq!(Identity::from_value(&json!(["123"])), None);
        assert_eq!(Identity::from_value(&json!({"uid": 123})), None);
    }

    #[test]
    fn test_matches_normalizes_numeric_form() {
        let identity = Identity::from_value(&json!(123)).unwrap();
        assert!(identity.matches("123"));
        assert!(!identity.matches("122"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Identity::new("yyyy").to_string(), "yyyy");
    }
}
