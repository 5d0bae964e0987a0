//! HTTP response types for the Storenvy API client.
//!
//! The client is a thin transport: response bodies are buffered and handed
//! back as text. Parsing is left to the caller, with [`HttpResponse::json`]
//! as a convenience.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::clients::errors::HttpResponseError;

/// The buffered body of a response.
///
/// Storenvy answers some requests with a successful status and no body at
/// all, most often because the access token lacks the scope the endpoint
/// needs. That case is kept apart from a body that is present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    /// The response carried a non-empty body.
    Text(String),
    /// The response carried no body.
    Empty,
}

impl ResponseBody {
    /// Wraps buffered body text, mapping an empty string to [`ResponseBody::Empty`].
    #[must_use]
    pub fn from_text(text: String) -> Self {
        if text.is_empty() {
            Self::Empty
        } else {
            Self::Text(text)
        }
    }

    /// Returns the body text, or `""` for an empty body.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Empty => "",
        }
    }

    /// Returns `true` if the response carried no body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// A response from the Storenvy API.
///
/// # Example
///
/// ```rust
/// use storenvy_api::clients::{HttpResponse, ResponseBody};
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(
///     200,
///     HashMap::new(),
///     ResponseBody::from_text(r#"{"data":{"id":"1"}}"#.to_string()),
/// );
///
/// assert!(response.is_ok());
/// let value: serde_json::Value = response.json().unwrap();
/// assert_eq!(value["data"]["id"], "1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercased name (headers may repeat).
    pub headers: HashMap<String, Vec<String>>,
    /// The buffered, unparsed body.
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: ResponseBody,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the body text, or `""` when the body was empty.
    #[must_use]
    pub fn text(&self) -> &str {
        self.body.as_str()
    }

    /// Returns `true` if the response carried no body.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Deserializes the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the body is empty or is not valid
    /// JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(self.text())
    }

    /// Turns a non-2xx response into an error, passing 2xx responses through.
    ///
    /// The dispatcher delivers every status as a response; this lets callers
    /// opt in to treating error statuses as failures.
    ///
    /// # Errors
    ///
    /// Returns [`HttpResponseError`] carrying the status and body text if the
    /// status is outside the 2xx range.
    pub fn error_for_status(self) -> Result<Self, HttpResponseError> {
        if self.is_ok() {
            return Ok(self);
        }
        Err(HttpResponseError {
            code: self.code,
            message: self.body.as_str().to_string(),
        })
    }
}
