//! Authorization code exchange.
//!
//! After the store owner approves the application, Storenvy redirects to the
//! redirect URI with a `code`. [`exchange_code`] trades that code for an
//! access token, a refresh token and the token lifetime.
//!
//! The exchange is a single POST with every parameter in the query string:
//!
//! ```text
//! POST <token_url>?client_id=..&client_secret=..&code=..&grant_type=authorization_code&redirect_uri=..
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use storenvy_api::auth::oauth::generate_client;
//!
//! // `code` comes from the redirect's query string
//! let client = generate_client(&config, &code).await?;
//! let me = client.get_user_info(&RequestOptions::default()).await?;
//! ```

use chrono::Utc;
use serde::Deserialize;

use crate::auth::oauth::authorize::OAuthApp;
use crate::auth::oauth::error::OAuthError;
use crate::auth::Credentials;
use crate::clients::{HttpClient, HttpMethod, RequestDescriptor};
use crate::config::{AccessToken, StorenvyConfig};
use crate::rest::encode_component;
use crate::StorenvyClient;

/// Grant type sent with the exchange.
const GRANT_TYPE: &str = "authorization_code";

/// Token endpoint response.
#[derive(Debug, Deserialize)]
struct AccessTokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Builds the token request for `code`.
fn token_request(config: &StorenvyConfig, code: &str) -> Result<RequestDescriptor, OAuthError> {
    let app = OAuthApp::from_config(config)?;

    let url = format!(
        "{}?client_id={}&client_secret={}&code={}&grant_type={GRANT_TYPE}&redirect_uri={}",
        config.oauth_token_url(),
        encode_component(app.app_id.as_ref()),
        encode_component(app.app_secret.as_ref()),
        encode_component(code),
        encode_component(app.redirect_uri.as_ref()),
    );
    Ok(RequestDescriptor::new(HttpMethod::Post, url))
}

/// Turns a token endpoint body into credentials.
fn parse_token_response(config: &StorenvyConfig, body: &str) -> Result<Credentials, OAuthError> {
    let response: AccessTokenResponse =
        serde_json::from_str(body).map_err(|e| OAuthError::InvalidTokenResponse {
            reason: e.to_string(),
        })?;

    let access_token =
        AccessToken::new(response.access_token).map_err(|e| OAuthError::InvalidTokenResponse {
            reason: e.to_string(),
        })?;

    Ok(Credentials {
        access_token: Some(access_token),
        app_id: config.app_id().cloned(),
        app_secret: config.app_secret().cloned(),
        refresh_token: response.refresh_token,
        expires_in: response.expires_in,
        issued_at: Some(Utc::now()),
    })
}

/// Exchanges an authorization code for credentials.
///
/// The returned credentials carry the configuration's app ID and secret, so
/// they can also be used for account creation.
///
/// # Errors
///
/// - [`OAuthError::IncompleteCredentials`] if the configuration lacks the
///   app ID, secret or redirect URI; nothing is sent in that case
/// - [`OAuthError::TokenExchangeFailed`] if the token endpoint answers with a
///   non-success status
/// - [`OAuthError::InvalidTokenResponse`] if the answer is empty, is not JSON
///   or has no usable access token
/// - [`OAuthError::Http`] if the request cannot be completed
pub async fn exchange_code(config: &StorenvyConfig, code: &str) -> Result<Credentials, OAuthError> {
    let descriptor = token_request(config, code)?;
    let response = HttpClient::new(Some(config)).dispatch(&descriptor).await?;

    if !response.is_ok() {
        tracing::warn!(status = response.code, "Storenvy token exchange was rejected");
        return Err(OAuthError::TokenExchangeFailed {
            status: response.code,
            message: response.text().to_string(),
        });
    }

    parse_token_response(config, response.text())
}

/// Exchanges an authorization code and returns a client using the new
/// credentials.
///
/// # Errors
///
/// Same as [`exchange_code`].
pub async fn generate_client(
    config: &StorenvyConfig,
    code: &str,
) -> Result<StorenvyClient, OAuthError> {
    let credentials = exchange_code(config, code).await?;
    Ok(StorenvyClient::new(credentials, Some(config)))
}
