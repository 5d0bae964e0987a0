//! Configuration types for the Storenvy API client.
//!
//! This module provides the configuration used by every client in the crate.
//!
//! # Overview
//!
//! - [`StorenvyConfig`]: Application credentials, endpoint URLs and client settings
//! - [`StorenvyConfigBuilder`]: A builder for constructing [`StorenvyConfig`] instances
//! - [`AccessToken`], [`AppId`], [`AppSecret`]: Validated credential newtypes
//! - [`BaseUrl`], [`RedirectUri`], [`Subdomain`]: Validated address newtypes
//!
//! Every field has a default pointing at the production Storenvy hosts, so
//! `StorenvyConfig::default()` is enough for authenticated and public calls.
//! Application credentials are only needed for the OAuth flow and for
//! account creation.
//!
//! # Example
//!
//! ```rust
//! use storenvy_api::{AppId, AppSecret, RedirectUri, StorenvyConfig};
//!
//! let config = StorenvyConfig::builder()
//!     .app_id(AppId::new("my-app-id").unwrap())
//!     .app_secret(AppSecret::new("my-secret").unwrap())
//!     .redirect_uri(RedirectUri::new("http://localhost:8080/").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert!(config.is_complete());
//! ```

mod newtypes;

pub use newtypes::{AccessToken, AppId, AppSecret, BaseUrl, RedirectUri, Subdomain};

use crate::error::ConfigError;

/// Default base URL for authenticated REST calls.
pub const DEFAULT_API_BASE_URL: &str = "https://api.storenvy.com/v1";

/// Default URL of the OAuth authorization page.
pub const DEFAULT_OAUTH_AUTHORIZE_URL: &str = "https://www.storenvy.com/oauth/authorize";

/// Default URL of the OAuth token endpoint.
pub const DEFAULT_OAUTH_TOKEN_URL: &str = "https://api.storenvy.com/oauth/token";

/// Default host that store subdomains hang off for public reads.
pub const DEFAULT_PUBLIC_HOST: &str = "storenvy.com";

/// Default scheme for public reads.
pub const DEFAULT_PUBLIC_SCHEME: &str = "http";

/// Configuration for the Storenvy API client.
///
/// # Thread Safety
///
/// `StorenvyConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Example
///
/// ```rust
/// use storenvy_api::{BaseUrl, StorenvyConfig};
///
/// let config = StorenvyConfig::builder()
///     .api_base_url(BaseUrl::new("https://api.storenvy.com/v1").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// assert!(!config.is_complete());
/// ```
#[derive(Clone, Debug)]
pub struct StorenvyConfig {
    app_id: Option<AppId>,
    app_secret: Option<AppSecret>,
    redirect_uri: Option<RedirectUri>,
    api_base_url: BaseUrl,
    oauth_authorize_url: BaseUrl,
    oauth_token_url: BaseUrl,
    public_host: String,
    public_scheme: String,
    proxy_host: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl StorenvyConfig {
    /// Creates a new builder for constructing a `StorenvyConfig`.
    #[must_use]
    pub fn builder() -> StorenvyConfigBuilder {
        StorenvyConfigBuilder::new()
    }

    /// Returns the application ID, if configured.
    #[must_use]
    pub const fn app_id(&self) -> Option<&AppId> {
        self.app_id.as_ref()
    }

    /// Returns the application secret, if configured.
    #[must_use]
    pub const fn app_secret(&self) -> Option<&AppSecret> {
        self.app_secret.as_ref()
    }

    /// Returns the OAuth redirect URI, if configured.
    #[must_use]
    pub const fn redirect_uri(&self) -> Option<&RedirectUri> {
        self.redirect_uri.as_ref()
    }

    /// Returns the base URL for authenticated REST calls.
    #[must_use]
    pub const fn api_base_url(&self) -> &BaseUrl {
        &self.api_base_url
    }

    /// Returns the OAuth authorization page URL.
    #[must_use]
    pub const fn oauth_authorize_url(&self) -> &BaseUrl {
        &self.oauth_authorize_url
    }

    /// Returns the OAuth token endpoint URL.
    #[must_use]
    pub const fn oauth_token_url(&self) -> &BaseUrl {
        &self.oauth_token_url
    }

    /// Returns the host that store subdomains hang off for public reads.
    #[must_use]
    pub fn public_host(&self) -> &str {
        &self.public_host
    }

    /// Returns the scheme used for public reads.
    #[must_use]
    pub fn public_scheme(&self) -> &str {
        &self.public_scheme
    }

    /// Returns the proxy that public reads are routed through, if configured.
    ///
    /// When set, public requests go to the proxy and carry a `Host` header
    /// naming the store, instead of resolving `<subdomain>.<public_host>`.
    #[must_use]
    pub const fn proxy_host(&self) -> Option<&BaseUrl> {
        self.proxy_host.as_ref()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns `true` when the application ID, secret and redirect URI are
    /// all present, which is what the OAuth flow requires.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.app_id.is_some() && self.app_secret.is_some() && self.redirect_uri.is_some()
    }
}

impl Default for StorenvyConfig {
    fn default() -> Self {
        Self {
            app_id: None,
            app_secret: None,
            redirect_uri: None,
            api_base_url: default_url(DEFAULT_API_BASE_URL),
            oauth_authorize_url: default_url(DEFAULT_OAUTH_AUTHORIZE_URL),
            oauth_token_url: default_url(DEFAULT_OAUTH_TOKEN_URL),
            public_host: DEFAULT_PUBLIC_HOST.to_string(),
            public_scheme: DEFAULT_PUBLIC_SCHEME.to_string(),
            proxy_host: None,
            user_agent_prefix: None,
        }
    }
}

/// Parses one of the built-in default URLs.
///
/// # Panics
///
/// Panics if a default URL constant is malformed, which the unit tests rule out.
fn default_url(url: &str) -> BaseUrl {
    BaseUrl::new(url).expect("built-in default URL is valid")
}

// Verify StorenvyConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorenvyConfig>();
};

/// Builder for constructing [`StorenvyConfig`] instances.
///
/// No field is required; unset fields fall back to the production defaults.
#[derive(Debug, Default)]
pub struct StorenvyConfigBuilder {
    app_id: Option<AppId>,
    app_secret: Option<AppSecret>,
    redirect_uri: Option<RedirectUri>,
    api_base_url: Option<BaseUrl>,
    oauth_authorize_url: Option<BaseUrl>,
    oauth_token_url: Option<BaseUrl>,
    public_host: Option<String>,
    public_scheme: Option<String>,
    proxy_host: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
}

impl StorenvyConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the application ID.
    #[must_use]
    pub fn app_id(mut self, id: AppId) -> Self {
        self.app_id = Some(id);
        self
    }

    /// Sets the application secret.
    #[must_use]
    pub fn app_secret(mut self, secret: AppSecret) -> Self {
        self.app_secret = Some(secret);
        self
    }

    /// Sets the OAuth redirect URI.
    #[must_use]
    pub fn redirect_uri(mut self, uri: RedirectUri) -> Self {
        self.redirect_uri = Some(uri);
        self
    }

    /// Sets the base URL for authenticated REST calls.
    #[must_use]
    pub fn api_base_url(mut self, url: BaseUrl) -> Self {
        self.api_base_url = Some(url);
        self
    }

    /// Sets the OAuth authorization page URL.
    #[must_use]
    pub fn oauth_authorize_url(mut self, url: BaseUrl) -> Self {
        self.oauth_authorize_url = Some(url);
        self
    }

    /// Sets the OAuth token endpoint URL.
    #[must_use]
    pub fn oauth_token_url(mut self, url: BaseUrl) -> Self {
        self.oauth_token_url = Some(url);
        self
    }

    /// Sets the host that store subdomains hang off for public reads.
    #[must_use]
    pub fn public_host(mut self, host: impl Into<String>) -> Self {
        self.public_host = Some(host.into());
        self
    }

    /// Sets the scheme used for public reads (`http` or `https`).
    #[must_use]
    pub fn public_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.public_scheme = Some(scheme.into());
        self
    }

    /// Routes public reads through a proxy.
    #[must_use]
    pub fn proxy_host(mut self, url: BaseUrl) -> Self {
        self.proxy_host = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StorenvyConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the public host or scheme
    /// cannot form a valid URL.
    pub fn build(self) -> Result<StorenvyConfig, ConfigError> {
        let defaults = StorenvyConfig::default();

        let public_host = self
            .public_host
            .map(|host| host.trim().trim_matches('/').to_lowercase())
            .unwrap_or(defaults.public_host);
        let public_scheme = self
            .public_scheme
            .map(|scheme| scheme.trim().to_lowercase())
            .unwrap_or(defaults.public_scheme);

        if public_host.is_empty() || public_host.contains(['/', ' ', ':']) {
            return Err(ConfigError::InvalidUrl { url: public_host });
        }
        // A public host is only usable if `<scheme>://<sub>.<host>` parses.
        BaseUrl::new(format!("{public_scheme}://store.{public_host}"))?;

        Ok(StorenvyConfig {
            app_id: self.app_id,
            app_secret: self.app_secret,
            redirect_uri: self.redirect_uri,
            api_base_url: self.api_base_url.unwrap_or(defaults.api_base_url),
            oauth_authorize_url: self
                .oauth_authorize_url
                .unwrap_or(defaults.oauth_authorize_url),
            oauth_token_url: self.oauth_token_url.unwrap_or(defaults.oauth_token_url),
            public_host,
            public_scheme,
            proxy_host: self.proxy_host,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
