//! HTTP-specific error types for the Storenvy API client.
//!
//! # Error Handling
//!
//! - [`HttpError`]: Failures of the transport itself (DNS, connection, TLS)
//! - [`HttpResponseError`]: A non-2xx response, produced only when the caller
//!   asks for it via [`HttpResponse::error_for_status`](crate::clients::HttpResponse::error_for_status)
//!
//! The dispatcher never retries; a transport failure is reported once.
//!
//! # Example
//!
//! ```rust,ignore
//! use storenvy_api::clients::HttpError;
//!
//! match client.dispatch(&descriptor).await {
//!     Ok(response) if response.is_empty() => println!("no data"),
//!     Ok(response) => println!("{}", response.text()),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

/// Error for a response whose status code is outside the 2xx range.
///
/// # Example
///
/// ```rust
/// use storenvy_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"error":"Not found"}"#.to_string(),
/// };
///
/// assert_eq!(error.to_string(), r#"HTTP 404: {"error":"Not found"}"#);
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub message: String,
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
