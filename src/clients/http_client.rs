//! HTTP dispatcher for Storenvy API communication.
//!
//! This module provides the [`HttpClient`] type, which performs exactly one
//! HTTP request per [`RequestDescriptor`] and buffers the response body.

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, RequestDescriptor};
use crate::clients::http_response::{HttpResponse, ResponseBody};
use crate::config::StorenvyConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client that dispatches request descriptors.
///
/// The client handles:
/// - Default headers (`User-Agent`, `Accept`)
/// - Sending the descriptor's method, URL and headers with no body
/// - Buffering the whole response body as text
///
/// There is no retry, timeout or backoff: each call is a single attempt and
/// callers needing resilience wrap it themselves.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`. Concurrent dispatches share nothing but
/// the immutable default headers and the connection pool.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client.
    ///
    /// # Arguments
    ///
    /// * `config` - Optional configuration for `user_agent_prefix`
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use storenvy_api::clients::HttpClient;
    ///
    /// let client = HttpClient::new(None);
    /// assert!(client.default_headers().contains_key("User-Agent"));
    /// ```
    #[must_use]
    pub fn new(config: Option<&StorenvyConfig>) -> Self {
        let user_agent_prefix = config
            .and_then(StorenvyConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Storenvy API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            default_headers,
        }
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and buffers its body.
    ///
    /// Every status code is delivered as a response; only transport failures
    /// are errors. A response with no body comes back as
    /// [`ResponseBody::Empty`] and is logged as a warning, since it usually
    /// means the access token lacks the scope for the requested data.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the connection fails or the body
    /// cannot be read.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let descriptor = RequestDescriptor::new(HttpMethod::Get, url);
    /// let response = client.dispatch(&descriptor).await?;
    /// if response.is_empty() {
    ///     println!("nothing returned");
    /// }
    /// ```
    pub async fn dispatch(&self, descriptor: &RequestDescriptor) -> Result<HttpResponse, HttpError> {
        tracing::debug!(
            method = %descriptor.method,
            path = descriptor.path(),
            "Dispatching Storenvy API request"
        );

        let mut req_builder = match descriptor.method {
            HttpMethod::Get => self.client.get(&descriptor.url),
            HttpMethod::Post => self.client.post(&descriptor.url),
            HttpMethod::Put => self.client.put(&descriptor.url),
            HttpMethod::Delete => self.client.delete(&descriptor.url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        for (key, value) in &descriptor.headers {
            req_builder = req_builder.header(key, value);
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = ResponseBody::from_text(res.text().await?);

        if body.is_empty() {
            tracing::warn!(
                method = %descriptor.method,
                path = descriptor.path(),
                status = code,
                "Nothing returned. You may have set incorrect scopes for this data."
            );
        }

        let response = HttpResponse::new(code, headers, body);
        if !response.is_ok() {
            tracing::debug!(
                method = %descriptor.method,
                path = descriptor.path(),
                status = code,
                "Storenvy API returned a non-success status"
            );
        }

        Ok(response)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(None);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Storenvy API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = StorenvyConfig::builder()
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(Some(&config));

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Storenvy API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(None);

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_no_access_token_header() {
        // The token travels in the query string, never as a header.
        let client = HttpClient::new(None);
        assert_eq!(client.default_headers().len(), 2);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
