//! Snsauth Domain - Core verification types
//!
//! This crate defines the domain model for snsauth token verification:
//! the supported social providers, the request descriptors sent to their
//! identity endpoints, and the identities extracted from their responses.
//! All types here are pure Rust with no I/O dependencies.

pub mod config;
pub mod error;
pub mod identity;
pub mod provider;
pub mod request;
pub mod response;

pub use config::ValidatorConfig;
pub use error::{DomainError, DomainResult};
pub use identity::Identity;
pub use provider::Provider;
pub use request::{HttpMethod, TokenRequest};
pub use response::{ProviderResponse, ResponseBody};
