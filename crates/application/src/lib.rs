//! Snsauth Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for external dependencies)
//! - The token validation use case
//! - Application-level error handling

pub mod ports;
pub mod validator;

pub use ports::{HttpClient, HttpClientError};
pub use validator::{TokenValidator, ValidateError, ValidateResult};
