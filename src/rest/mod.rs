//! Request construction for the Storenvy REST API.
//!
//! This module turns a logical resource plus IDs and attributes into the
//! absolute URL that goes on the wire:
//!
//! - **[`Endpoint`]**: the fixed table of resource path templates
//! - **[`AttributeSet`]**: ordered attributes and their query-string encoding
//! - **[`UrlBuilder`]**: read (`.json`) and write URLs carrying the access token
//! - **[`resources`]**: the operations of [`StorenvyClient`](crate::StorenvyClient)
//!
//! # Example
//!
//! ```rust
//! use storenvy_api::rest::{AttributeSet, Endpoint, UrlBuilder};
//! use storenvy_api::{AccessToken, BaseUrl};
//!
//! let urls = UrlBuilder::new(
//!     BaseUrl::new("https://api.storenvy.com/v1").unwrap(),
//!     Some(AccessToken::new("1234567abcdef").unwrap()),
//! );
//!
//! let path = Endpoint::Orders.resolve(&[]).unwrap();
//! let attrs = AttributeSet::new().with("status", "open");
//!
//! assert_eq!(
//!     urls.build_read_url(&path, Some(&attrs), None).unwrap(),
//!     "https://api.storenvy.com/v1/orders.json?access_token=1234567abcdef&status=open"
//! );
//! ```

mod attributes;
mod endpoint;
mod url_builder;

pub mod resources;

// Public exports
pub use attributes::{encode_component, validate_cents, value_to_text, AttributeSet, MAX_CENTS};
pub use endpoint::{Endpoint, PLACEHOLDER};
pub use resources::AccountOwner;
pub use url_builder::UrlBuilder;
