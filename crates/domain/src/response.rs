//! Provider responses and identity extraction
//!
//! Contains the decoded response returned by a provider endpoint and the
//! logic that digs the user identity out of it, uniformly across the
//! providers' three response shapes.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identity::Identity;

/// Wrapper literals around QQ's JSONP payloads.
const JSONP_PREFIX: &str = "callback(";
const JSONP_SUFFIX: &str = ");";

/// Response returned by a provider verification endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderResponse {
    /// HTTP status code.
    pub status: u16,
    /// Decoded response body.
    pub body: ResponseBody,
}

impl ProviderResponse {
    /// Creates a response from a status code and a decoded body.
    #[must_use]
    pub const fn new(status: u16, body: ResponseBody) -> Self {
        Self { status, body }
    }

    /// Returns true if the status code indicates success (2xx).
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Body of a provider response.
///
/// The transport decodes payloads the server declared as JSON; everything
/// else arrives as raw text, QQ's JSONP payloads among them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResponseBody {
    /// Body decoded from a JSON payload.
    Json(Value),
    /// Raw text body.
    Text(String),
}

impl ResponseBody {
    /// Extracts the user identity carried by this body, if any.
    ///
    /// JSON bodies are searched for a `uid` field (Weibo, numeric or
    /// string) and then an `openid` field (WeChat). Text bodies are
    /// unwrapped from QQ's `callback( ... );` JSONP form and searched for
    /// `openid`. Returns `None` when no identity is present, whatever the
    /// reason: missing fields, absent wrapper, malformed JSON, or a field
    /// of the wrong type.
    #[must_use]
    pub fn extract_identity(&self) -> Option<Identity> {
        match self {
            Self::Json(value) => extract_from_json(value),
            Self::Text(text) => {
                let inner = strip_jsonp(text)?;
                let value: Value = serde_json::from_str(inner).ok()?;
                value.get("openid").and_then(Identity::from_value)
            }
        }
    }
}

impl fmt::Display for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Looks up the identity fields of a decoded JSON body, `uid` first.
fn extract_from_json(value: &Value) -> Option<Identity> {
    value
        .get("uid")
        .and_then(Identity::from_value)
        .or_else(|| value.get("openid").and_then(Identity::from_value))
}

/// Unwraps a JSONP payload anchored to the exact wrapper literals,
/// tolerating surrounding whitespace.
///
/// Returns `None` when either literal is absent.
fn strip_jsonp(text: &str) -> Option<&str> {
    let inner = text
        .trim()
        .strip_prefix(JSONP_PREFIX)?
        .strip_suffix(JSONP_SUFFIX)?;
    Some(inner.trim())
}
