//! Validated newtype wrappers for configuration and credential values.
//!
//! Each wrapper validates its contents on construction, so a value that made
//! it into a client is known to be usable when a request is built.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Implements string (de)serialization through the validating constructor.
macro_rules! string_serde {
    ($ty:ident) => {
        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(self.as_ref())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::new(s).map_err(de::Error::custom)
            }
        }
    };
}

/// A validated Storenvy OAuth access token.
///
/// The token authorizes calls on behalf of a store owner and is sent as the
/// `access_token` query parameter. Its value is masked in debug output.
///
/// # Example
///
/// ```rust
/// use storenvy_api::AccessToken;
///
/// let token = AccessToken::new("1234567abcdef").unwrap();
/// assert_eq!(token.as_ref(), "1234567abcdef");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

string_serde!(AccessToken);

/// A validated Storenvy application ID (the OAuth `client_id`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppId(String);

impl AppId {
    /// Creates a new validated application ID.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppId`] if the ID is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyAppId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for AppId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

string_serde!(AppId);

/// A validated Storenvy application secret.
///
/// The `Debug` implementation masks the value, displaying only
/// `AppSecret(*****)`.
///
/// # Example
///
/// ```rust
/// use storenvy_api::AppSecret;
///
/// let secret = AppSecret::new("my-secret").unwrap();
/// assert_eq!(format!("{:?}", secret), "AppSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AppSecret(String);

impl AppSecret {
    /// Creates a new validated application secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAppSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.trim().is_empty() {
            return Err(ConfigError::EmptyAppSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for AppSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AppSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AppSecret(*****)")
    }
}

string_serde!(AppSecret);

/// A validated absolute URL with a scheme and host.
///
/// Trailing slashes are stripped so paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use storenvy_api::BaseUrl;
///
/// let url = BaseUrl::new("https://api.storenvy.com/v1/").unwrap();
/// assert_eq!(url.as_ref(), "https://api.storenvy.com/v1");
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), "api.storenvy.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl BaseUrl {
    /// Creates a new validated URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL has no scheme or host,
    /// or carries a query string or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidUrl { url: url.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        if url.contains(['?', '#']) {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative path onto this URL with a single `/`.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A validated OAuth redirect URI.
///
/// Unlike [`BaseUrl`], the value is kept verbatim, including any trailing
/// slash, because Storenvy compares it byte-for-byte with the registered URI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedirectUri(String);

impl RedirectUri {
    /// Creates a new validated redirect URI.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URI has no scheme or host.
    pub fn new(uri: impl Into<String>) -> Result<Self, ConfigError> {
        let uri: String = uri.into();
        let uri = uri.trim().to_string();
        let without_query = uri.split(['?', '#']).next().unwrap_or_default();
        BaseUrl::new(without_query).map_err(|_| ConfigError::InvalidUrl { url: uri.clone() })?;
        Ok(Self(uri))
    }
}

impl AsRef<str> for RedirectUri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

string_serde!(RedirectUri);

/// A validated Storenvy store subdomain.
///
/// Public storefront reads are addressed by subdomain
/// (`<subdomain>.storenvy.com`) rather than by access token.
///
/// # Example
///
/// ```rust
/// use storenvy_api::Subdomain;
///
/// let subdomain = Subdomain::new("My-Store").unwrap();
/// assert_eq!(subdomain.as_ref(), "my-store");
/// assert!(Subdomain::new("-bad").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Subdomain(String);

impl Subdomain {
    /// Creates a new validated subdomain, normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSubdomain`] if the subdomain is empty,
    /// starts or ends with a hyphen, or contains characters other than
    /// letters, digits and hyphens.
    pub fn new(subdomain: impl Into<String>) -> Result<Self, ConfigError> {
        let subdomain: String = subdomain.into();
        let subdomain = subdomain.trim().to_lowercase();

        let valid = !subdomain.is_empty()
            && !subdomain.starts_with('-')
            && !subdomain.ends_with('-')
            && subdomain
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if !valid {
            return Err(ConfigError::InvalidSubdomain { subdomain });
        }
        Ok(Self(subdomain))
    }
}

impl AsRef<str> for Subdomain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subdomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

string_serde!(Subdomain);
