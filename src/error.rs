//! Error types for the Storenvy API client.
//!
//! This module contains the error type used when configuration values or
//! credentials fail validation.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` so that bad
//! values are rejected before any request is built.
//!
//! # Example
//!
//! ```rust
//! use storenvy_api::{AccessToken, ConfigError};
//!
//! let result = AccessToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAccessToken)));
//! ```

use thiserror::Error;

/// Errors that can occur while building configuration or credentials.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid Storenvy access token.")]
    EmptyAccessToken,

    /// Application ID cannot be empty.
    #[error("Application ID cannot be empty. Please provide a valid Storenvy application ID.")]
    EmptyAppId,

    /// Application secret cannot be empty.
    #[error("Application secret cannot be empty. Please provide a valid Storenvy application secret.")]
    EmptyAppSecret,

    /// Store subdomain is invalid.
    #[error("Invalid store subdomain '{subdomain}'. Expected lowercase letters, digits and hyphens (e.g., 'my-store').")]
    InvalidSubdomain {
        /// The invalid subdomain that was provided.
        subdomain: String,
    },

    /// A URL is invalid.
    #[error("Invalid URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://api.storenvy.com/v1').")]
    InvalidUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Stored credentials could not be parsed.
    #[error("Invalid credentials document: {reason}")]
    InvalidCredentials {
        /// Why parsing failed.
        reason: String,
    },
}
