//! OAuth 2.0 authorization code flow for Storenvy applications.
//!
//! 1. **Authorization** ([`build_authorize_url`]): redirect the store owner
//!    to Storenvy to grant the requested [`AuthScopes`](crate::AuthScopes).
//! 2. **Code exchange** ([`exchange_code`]): when Storenvy redirects back with
//!    a `code`, trade it for [`Credentials`](crate::Credentials).
//!    [`generate_client`] does the same and returns a ready client.
//!
//! Both steps need a configuration with an app ID, app secret and redirect
//! URI.
//!
//! # Example
//!
//! ```rust,ignore
//! use storenvy_api::{AppId, AppSecret, AuthScopes, RedirectUri, StorenvyConfig};
//! use storenvy_api::auth::oauth::{build_authorize_url, exchange_code};
//!
//! let config = StorenvyConfig::builder()
//!     .app_id(AppId::new("your-app-id")?)
//!     .app_secret(AppSecret::new("your-secret")?)
//!     .redirect_uri(RedirectUri::new("https://your-app.com/auth/callback")?)
//!     .build()?;
//!
//! // Step 1: redirect the store owner
//! let url = build_authorize_url(&config, AuthScopes::new().store_read().store_write())?;
//!
//! // Step 2: in the callback handler
//! let credentials = exchange_code(&config, &code).await?;
//! let stored = serde_json::to_string(&credentials)?;
//! ```

mod authorize;
mod error;
mod token_exchange;

pub use authorize::build_authorize_url;
pub use error::OAuthError;
pub use token_exchange::{exchange_code, generate_client};
