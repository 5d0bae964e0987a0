//! # Storenvy API Client
//!
//! An async Rust client for the Storenvy e-commerce REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`StorenvyConfig`] and [`StorenvyConfigBuilder`]
//! - Validated newtypes for credentials, URLs and store subdomains
//! - [`StorenvyClient`], with one method per API operation (user, store,
//!   orders, products, variants, collections, shipping, webhooks, accounts)
//! - [`PublicClient`] for anonymous storefront reads
//! - The OAuth 2.0 authorization code flow via [`auth::oauth`]
//! - Storable [`Credentials`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use storenvy_api::{AccessToken, Credentials, RequestOptions, StorenvyClient};
//!
//! let credentials = Credentials::with_access_token(AccessToken::new("1234567abcdef")?);
//! let client = StorenvyClient::new(credentials, None);
//!
//! // GET https://api.storenvy.com/v1/orders/34543.json?access_token=1234567abcdef
//! let response = client.get_order("34543", &RequestOptions::default()).await?;
//! let order: serde_json::Value = response.json()?;
//! ```
//!
//! ## Requests
//!
//! Every operation resolves an endpoint template with its IDs, appends the
//! access token and attributes to the query string, and sends exactly one
//! request. Reads target `<path>.json`; writes (POST, PUT, DELETE) target
//! `<path>` and carry their attributes in the query string as well, with no
//! request body.
//!
//! ```rust
//! use storenvy_api::{AccessToken, AttributeSet, Credentials, RequestOptions, StorenvyClient};
//! use storenvy_api::clients::HttpMethod;
//! use storenvy_api::rest::Endpoint;
//!
//! let client = StorenvyClient::new(
//!     Credentials::with_access_token(AccessToken::new("1234567abcdef").unwrap()),
//!     None,
//! );
//!
//! let attrs = AttributeSet::new().with("name", "awesome product").with("cents", 1_000_000);
//! let descriptor = client
//!     .prepare(HttpMethod::Post, Endpoint::Products, &[], Some(&attrs), &RequestOptions::default())
//!     .unwrap();
//!
//! assert_eq!(
//!     descriptor.url,
//!     "https://api.storenvy.com/v1/products?access_token=1234567abcdef&name=awesome%20product&cents=1000000"
//! );
//! ```
//!
//! Problems a request could never recover from (a missing token, a wrong
//! number of IDs, an amount above [`rest::MAX_CENTS`]) are reported before
//! anything is sent.
//!
//! ## Responses
//!
//! Bodies are returned as unparsed text in an [`HttpResponse`]. A response
//! with no body is delivered as [`ResponseBody::Empty`] and logged as a
//! warning; it usually means the token lacks the scope for that data.
//!
//! ## OAuth Authentication
//!
//! ```rust,ignore
//! use storenvy_api::{AppId, AppSecret, AuthScopes, RedirectUri, StorenvyConfig};
//! use storenvy_api::auth::oauth::{build_authorize_url, generate_client};
//!
//! let config = StorenvyConfig::builder()
//!     .app_id(AppId::new("your-app-id")?)
//!     .app_secret(AppSecret::new("your-secret")?)
//!     .redirect_uri(RedirectUri::new("https://your-app.com/auth/callback")?)
//!     .build()?;
//!
//! // Redirect the store owner here
//! let url = build_authorize_url(&config, AuthScopes::new().store_read().store_write())?;
//!
//! // Then, with the `code` from the callback
//! let client = generate_client(&config, &code).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All clients are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio runtime
//! - **Thin transport**: One attempt per call, no retries, no response models

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthScopes, Credentials};
pub use config::{
    AccessToken, AppId, AppSecret, BaseUrl, RedirectUri, StorenvyConfig, StorenvyConfigBuilder,
    Subdomain,
};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpResponse, HttpResponseError, Pagination, PublicClient,
    RequestDescriptor, RequestOptions, ResponseBody, RestError, StorenvyClient,
};

// Re-export request construction types
pub use rest::{AccountOwner, AttributeSet, Endpoint};

// Re-export OAuth types for convenience
pub use auth::oauth::{build_authorize_url, exchange_code, generate_client, OAuthError};
