//! Authenticated REST client for the Storenvy API.
//!
//! # Overview
//!
//! - [`StorenvyClient`]: One method per Storenvy endpoint operation
//! - [`RequestOptions`]: Per-call settings, such as an access token override
//! - [`RestError`]: Error type for REST operations
//!
//! Every operation follows the same path: the endpoint template is resolved
//! with the operation's IDs, the access token and attributes are appended as
//! query parameters, and the request is dispatched once. The body comes back
//! as unparsed text.
//!
//! Reads target `<base>/<path>.json?access_token=...`; writes target
//! `<base>/<path>?access_token=...` and carry their attributes in the query
//! string too, with no request body.
//!
//! # Example
//!
//! ```rust,ignore
//! use storenvy_api::{AccessToken, Credentials, StorenvyClient};
//! use storenvy_api::clients::rest::RequestOptions;
//!
//! let credentials = Credentials::with_access_token(AccessToken::new("1234567abcdef")?);
//! let client = StorenvyClient::new(credentials, None);
//!
//! let response = client.get_order("34543", &RequestOptions::default()).await?;
//! println!("{}", response.text());
//! ```

mod client;
mod errors;

pub use client::{RequestOptions, StorenvyClient};
pub use errors::RestError;
