//! OAuth authorization URL generation.
//!
//! The first step of the authorization code flow: send the store owner to
//! Storenvy to grant the application access. Storenvy then redirects back
//! to the configured redirect URI with a `code`, which
//! [`exchange_code`](crate::auth::oauth::exchange_code) turns into
//! credentials.

use crate::auth::oauth::error::OAuthError;
use crate::auth::AuthScopes;
use crate::config::{AppId, AppSecret, RedirectUri, StorenvyConfig};
use crate::rest::encode_component;

/// The application credentials the OAuth flow needs.
pub(crate) struct OAuthApp<'a> {
    pub(crate) app_id: &'a AppId,
    pub(crate) app_secret: &'a AppSecret,
    pub(crate) redirect_uri: &'a RedirectUri,
}

impl<'a> OAuthApp<'a> {
    /// Pulls the application credentials out of `config`.
    pub(crate) fn from_config(config: &'a StorenvyConfig) -> Result<Self, OAuthError> {
        Ok(Self {
            app_id: config
                .app_id()
                .ok_or(OAuthError::IncompleteCredentials { field: "app_id" })?,
            app_secret: config
                .app_secret()
                .ok_or(OAuthError::IncompleteCredentials {
                    field: "app_secret",
                })?,
            redirect_uri: config
                .redirect_uri()
                .ok_or(OAuthError::IncompleteCredentials {
                    field: "redirect_uri",
                })?,
        })
    }
}

/// Builds the URL that starts the authorization code flow.
///
/// # Errors
///
/// Returns [`OAuthError::IncompleteCredentials`] unless the configuration
/// has an app ID, app secret and redirect URI (see
/// [`StorenvyConfig::is_complete`]).
///
/// # Example
///
/// ```rust
/// use storenvy_api::{AppId, AppSecret, AuthScopes, RedirectUri, StorenvyConfig};
/// use storenvy_api::auth::oauth::build_authorize_url;
///
/// let config = StorenvyConfig::builder()
///     .app_id(AppId::new("my-app").unwrap())
///     .app_secret(AppSecret::new("s3cret").unwrap())
///     .redirect_uri(RedirectUri::new("https://myapp.example.com/callback").unwrap())
///     .build()
///     .unwrap();
///
/// let url = build_authorize_url(&config, AuthScopes::new().store_read()).unwrap();
/// assert_eq!(
///     url,
///     "https://www.storenvy.com/oauth/authorize?client_id=my-app&response_type=code\
///      &redirect_uri=https%3A%2F%2Fmyapp.example.com%2Fcallback&scope=user%20store_read"
/// );
/// ```
pub fn build_authorize_url(
    config: &StorenvyConfig,
    scopes: AuthScopes,
) -> Result<String, OAuthError> {
    let app = OAuthApp::from_config(config)?;

    Ok(format!(
        "{}?client_id={}&response_type=code&redirect_uri={}&scope={}",
        config.oauth_authorize_url(),
        encode_component(app.app_id.as_ref()),
        encode_component(app.redirect_uri.as_ref()),
        encode_component(&scopes.to_scope_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_config() -> StorenvyConfig {
        StorenvyConfig::builder()
            .app_id(AppId::new("app").unwrap())
            .app_secret(AppSecret::new("secret").unwrap())
            .redirect_uri(RedirectUri::new("http://localhost:3000/auth").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_authorize_url_structure() {
        let url = build_authorize_url(&complete_config(), AuthScopes::new()).unwrap();
        assert!(url.starts_with("https://www.storenvy.com/oauth/authorize?"));
        assert!(url.contains("client_id=app"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth"));
        assert!(url.ends_with("&scope=user"));
    }

    #[test]
    fn test_authorize_url_with_both_store_scopes() {
        let scopes = AuthScopes::new().store_read().store_write();
        let url = build_authorize_url(&complete_config(), scopes).unwrap();
        assert!(url.ends_with("&scope=user%20store_read%20store_write"));
    }

    #[test]
    fn test_authorize_url_requires_redirect_uri() {
        let config = StorenvyConfig::builder()
            .app_id(AppId::new("app").unwrap())
            .app_secret(AppSecret::new("secret").unwrap())
            .build()
            .unwrap();
        assert!(matches!(
            build_authorize_url(&config, AuthScopes::new()),
            Err(OAuthError::IncompleteCredentials {
                field: "redirect_uri"
            })
        ));
    }

    #[test]
    fn test_authorize_url_requires_app_id() {
        let config = StorenvyConfig::default();
        assert!(matches!(
            build_authorize_url(&config, AuthScopes::new()),
            Err(OAuthError::IncompleteCredentials { field: "app_id" })
        ));
    }

    #[test]
    fn test_authorize_url_uses_configured_endpoint() {
        let config = StorenvyConfig::builder()
            .app_id(AppId::new("app").unwrap())
            .app_secret(AppSecret::new("secret").unwrap())
            .redirect_uri(RedirectUri::new("http://localhost:3000/auth").unwrap())
            .oauth_authorize_url(crate::config::BaseUrl::new("http://127.0.0.1:8080/oauth/authorize").unwrap())
            .build()
            .unwrap();
        let url = build_authorize_url(&config, AuthScopes::new()).unwrap();
        assert!(url.starts_with("http://127.0.0.1:8080/oauth/authorize?client_id=app"));
    }
}
