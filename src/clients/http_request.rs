//! Request descriptor types for the Storenvy API client.
//!
//! A [`RequestDescriptor`] is the fully resolved unit of work handed to the
//! dispatcher: an absolute URL, an HTTP method and any extra headers. Storenvy
//! carries write attributes in the query string, so descriptors never carry a
//! body.

use std::fmt;

/// HTTP methods used by the Storenvy API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns `true` for methods that modify server state.
    #[must_use]
    pub const fn is_write(self) -> bool {
        !matches!(self, Self::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A fully resolved request, ready to be dispatched.
///
/// # Example
///
/// ```rust
/// use storenvy_api::clients::{HttpMethod, RequestDescriptor};
///
/// let descriptor = RequestDescriptor::new(
///     HttpMethod::Get,
///     "https://api.storenvy.com/v1/me.json?access_token=abc",
/// );
///
/// assert_eq!(descriptor.method, HttpMethod::Get);
/// assert_eq!(descriptor.path(), "https://api.storenvy.com/v1/me.json");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RequestDescriptor {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The absolute URL, including the query string.
    pub url: String,
    /// Headers sent in addition to the client's default headers.
    pub headers: Vec<(String, String)>,
}

impl RequestDescriptor {
    /// Creates a descriptor with no extra headers.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
        }
    }

    /// Adds an extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((key.into(), value.into()));
        self
    }

    /// Returns the URL without its query string.
    ///
    /// The query string carries the access token, so this is what gets logged.
    #[must_use]
    pub fn path(&self) -> &str {
        self.url.split('?').next().unwrap_or_default()
    }

    /// Returns the raw query string, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.url.split_once('?').map(|(_, query)| query)
    }
}
