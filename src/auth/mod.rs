//! Authentication types for the Storenvy API client.
//!
//! # Overview
//!
//! - [`Credentials`]: The access token used by authenticated calls, plus the
//!   application credentials and token metadata
//! - [`AuthScopes`]: The scopes requested during authorization
//! - [`oauth`]: The OAuth 2.0 authorization code flow
//!
//! # Example
//!
//! ```rust
//! use storenvy_api::{AccessToken, Credentials};
//!
//! // Credentials for a token obtained elsewhere
//! let credentials = Credentials::with_access_token(AccessToken::new("1234567abcdef").unwrap());
//! assert!(!credentials.expired());
//! ```

mod credentials;
pub mod oauth;
mod scopes;

pub use credentials::Credentials;
pub use scopes::AuthScopes;
