//! OAuth-specific error types for the Storenvy API client.
//!
//! # Error Types
//!
//! - [`OAuthError::IncompleteCredentials`]: The configuration lacks the app ID, secret or redirect URI
//! - [`OAuthError::TokenExchangeFailed`]: The token endpoint answered with an error status
//! - [`OAuthError::InvalidTokenResponse`]: The token endpoint's answer could not be used
//! - [`OAuthError::Http`]: Wrapped HTTP client error
//!
//! # Example
//!
//! ```rust
//! use storenvy_api::auth::oauth::OAuthError;
//!
//! let error = OAuthError::IncompleteCredentials { field: "redirect_uri" };
//! assert!(error.to_string().contains("redirect_uri"));
//!
//! let error = OAuthError::TokenExchangeFailed {
//!     status: 401,
//!     message: "invalid_grant".to_string(),
//! };
//! assert!(error.to_string().contains("401"));
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Errors that can occur during OAuth operations.
///
/// # Thread Safety
///
/// `OAuthError` is `Send + Sync`, making it safe to use across async boundaries.
#[derive(Debug, Error)]
pub enum OAuthError {
    /// A value the OAuth flow needs is missing from the configuration.
    #[error("OAuth configuration is incomplete: '{field}' is not set")]
    IncompleteCredentials {
        /// The missing configuration field.
        field: &'static str,
    },

    /// The token endpoint returned a non-success status.
    #[error("Token exchange failed with status {status}: {message}")]
    TokenExchangeFailed {
        /// HTTP status code returned by the token endpoint.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The token endpoint's response could not be turned into credentials.
    #[error("Invalid token response: {reason}")]
    InvalidTokenResponse {
        /// What was wrong with the response.
        reason: String,
    },

    /// The token request could not be completed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

// Verify OAuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<OAuthError>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_credentials_message() {
        let error = OAuthError::IncompleteCredentials { field: "app_id" };
        assert_eq!(
            error.to_string(),
            "OAuth configuration is incomplete: 'app_id' is not set"
        );
    }

    #[test]
    fn test_token_exchange_failed_message() {
        let error = OAuthError::TokenExchangeFailed {
            status: 400,
            message: "bad code".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Token exchange failed with status 400: bad code"
        );
    }

    #[test]
    fn test_invalid_token_response_message() {
        let error = OAuthError::InvalidTokenResponse {
            reason: "missing access_token".to_string(),
        };
        assert!(error.to_string().contains("missing access_token"));
    }
}
