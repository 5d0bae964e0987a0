//! Absolute URL construction for authenticated requests.
//!
//! The API tells reads and writes apart by the `.json` suffix:
//!
//! - read: `<base>/<path>.json?access_token=<token>[&key=value]*`
//! - write: `<base>/<path>?access_token=<token>[&key=value]*`
//!
//! ```rust
//! use storenvy_api::rest::{AttributeSet, UrlBuilder};
//! use storenvy_api::{AccessToken, BaseUrl};
//!
//! let builder = UrlBuilder::new(
//!     BaseUrl::new("https://api.storenvy.com/v1").unwrap(),
//!     Some(AccessToken::new("1234567abcdef").unwrap()),
//! );
//!
//! assert_eq!(
//!     builder.build_read_url("orders/34543", None, None).unwrap(),
//!     "https://api.storenvy.com/v1/orders/34543.json?access_token=1234567abcdef"
//! );
//!
//! let attrs = AttributeSet::new().with("name", "awesome product").with("cents", 1_000_000);
//! assert_eq!(
//!     builder.build_write_url("products", Some(&attrs), None).unwrap(),
//!     "https://api.storenvy.com/v1/products?access_token=1234567abcdef&name=awesome%20product&cents=1000000"
//! );
//! ```

use crate::clients::rest::RestError;
use crate::config::{AccessToken, BaseUrl};
use crate::rest::attributes::{encode_component, AttributeSet};

/// Suffix that marks a JSON read endpoint.
const READ_SUFFIX: &str = ".json";

/// Builds absolute request URLs from relative paths.
#[derive(Clone, Debug)]
pub struct UrlBuilder {
    base: BaseUrl,
    default_token: Option<AccessToken>,
}

impl UrlBuilder {
    /// Creates a builder for `base`, falling back to `default_token` when a
    /// call does not supply its own.
    #[must_use]
    pub const fn new(base: BaseUrl, default_token: Option<AccessToken>) -> Self {
        Self {
            base,
            default_token,
        }
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base(&self) -> &BaseUrl {
        &self.base
    }

    /// Builds the URL for a read (GET) of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] if neither `access_token` nor
    /// the builder's default token is available.
    pub fn build_read_url(
        &self,
        path: &str,
        attrs: Option<&AttributeSet>,
        access_token: Option<&AccessToken>,
    ) -> Result<String, RestError> {
        self.build(path, READ_SUFFIX, attrs, access_token)
    }

    /// Builds the URL for a write (POST, PUT or DELETE) of `path`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] if neither `access_token` nor
    /// the builder's default token is available.
    pub fn build_write_url(
        &self,
        path: &str,
        attrs: Option<&AttributeSet>,
        access_token: Option<&AccessToken>,
    ) -> Result<String, RestError> {
        self.build(path, "", attrs, access_token)
    }

    fn build(
        &self,
        path: &str,
        suffix: &str,
        attrs: Option<&AttributeSet>,
        access_token: Option<&AccessToken>,
    ) -> Result<String, RestError> {
        let token = access_token
            .or(self.default_token.as_ref())
            .ok_or(RestError::MissingCredential {
                field: "access_token",
            })?;

        let mut url = self.base.join(path);
        url.push_str(suffix);
        url.push_str("?access_token=");
        url.push_str(&encode_component(token.as_ref()));
        if let Some(attrs) = attrs {
            url.push_str(&attrs.to_query_string());
        }
        Ok(url)
    }
}
