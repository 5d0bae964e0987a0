//! Credentials for authenticated Storenvy API calls.
//!
//! This module provides the [`Credentials`] type, which holds the access
//! token used on every authenticated call, plus the optional application
//! credentials and token metadata returned by the OAuth exchange.

use crate::config::{AccessToken, AppId, AppSecret};
use crate::error::ConfigError;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Credentials held by an authenticated client.
///
/// Only `access_token` is used to authorize calls. The application ID and
/// secret are needed for account creation; `refresh_token`, `expires_in` and
/// `issued_at` are informational and never enforced by the client.
///
/// Credentials serialize to JSON so they can be stored and loaded again.
/// Both `app_id` and the camel-case `appId` spelling are accepted on input.
///
/// # Example
///
/// ```rust
/// use storenvy_api::Credentials;
///
/// let credentials = Credentials::from_json(
///     r#"{"access_token": "1234567abcdef", "appId": "my-app", "appSecret": "s3cret"}"#,
/// )
/// .unwrap();
///
/// assert_eq!(credentials.access_token.unwrap().as_ref(), "1234567abcdef");
/// assert_eq!(credentials.app_id.unwrap().as_ref(), "my-app");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// The access token for API authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<AccessToken>,

    /// The application ID.
    #[serde(default, alias = "appId", skip_serializing_if = "Option::is_none")]
    pub app_id: Option<AppId>,

    /// The application secret.
    #[serde(default, alias = "appSecret", skip_serializing_if = "Option::is_none")]
    pub app_secret: Option<AppSecret>,

    /// The refresh token issued alongside the access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,

    /// Lifetime of the access token in seconds, as reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,

    /// When the access token was issued, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_at: Option<DateTime<Utc>>,
}

impl Credentials {
    /// Creates credentials holding only an access token.
    #[must_use]
    pub fn with_access_token(access_token: AccessToken) -> Self {
        Self {
            access_token: Some(access_token),
            ..Self::default()
        }
    }

    /// Parses stored credentials from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidCredentials`] if the document is not
    /// valid JSON or a field fails validation (e.g., an empty token).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::InvalidCredentials {
            reason: e.to_string(),
        })
    }

    /// Returns when the access token expires, if both the issue time and
    /// lifetime are known.
    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let issued_at = self.issued_at?;
        let lifetime = i64::try_from(self.expires_in?).ok()?;
        issued_at.checked_add_signed(Duration::seconds(lifetime))
    }

    /// Returns `true` if the access token is known to have expired.
    ///
    /// Credentials without expiry information are never considered expired.
    /// The client does not act on this; it is for callers deciding when to
    /// re-authorize.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expires_at().is_some_and(|expires| Utc::now() > expires)
    }
}

// Verify Credentials is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Credentials>();
};
