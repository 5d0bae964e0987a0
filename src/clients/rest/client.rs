//! Authenticated REST client for the Storenvy API.
//!
//! This module provides the [`StorenvyClient`] type and the request plumbing
//! shared by every operation. The operations themselves live in
//! [`crate::rest::resources`], one file per resource family.

use crate::auth::Credentials;
use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpResponse, RequestDescriptor};
use crate::config::{AccessToken, BaseUrl, StorenvyConfig};
use crate::rest::{AttributeSet, Endpoint, UrlBuilder};

/// Per-call settings for an operation.
///
/// # Example
///
/// ```rust
/// use storenvy_api::clients::rest::RequestOptions;
/// use storenvy_api::AccessToken;
///
/// // Use the client's stored token
/// let defaults = RequestOptions::default();
/// assert!(defaults.access_token.is_none());
///
/// // Act on behalf of a different store owner for one call
/// let options = RequestOptions::new().access_token(AccessToken::new("other-token").unwrap());
/// assert!(options.access_token.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Access token to use instead of the client's stored one.
    pub access_token: Option<AccessToken>,
}

impl RequestOptions {
    /// Creates options that use the client's defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the access token for this call.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }
}

/// Authenticated client for the Storenvy REST API.
///
/// Each operation resolves an [`Endpoint`], builds the URL with the access
/// token and attributes in the query string, and dispatches exactly one
/// request. Validation failures are reported before anything is sent.
///
/// # Thread Safety
///
/// `StorenvyClient` is `Send + Sync`. The credentials are read-only after
/// construction, so concurrent calls share no mutable state.
///
/// # Example
///
/// ```rust
/// use storenvy_api::{AccessToken, Credentials, StorenvyClient};
/// use storenvy_api::clients::rest::RequestOptions;
/// use storenvy_api::rest::Endpoint;
/// use storenvy_api::clients::HttpMethod;
///
/// let credentials = Credentials::with_access_token(AccessToken::new("1234567abcdef").unwrap());
/// let client = StorenvyClient::new(credentials, None);
///
/// let descriptor = client
///     .prepare(HttpMethod::Get, Endpoint::Order, &["34543"], None, &RequestOptions::default())
///     .unwrap();
/// assert_eq!(
///     descriptor.url,
///     "https://api.storenvy.com/v1/orders/34543.json?access_token=1234567abcdef"
/// );
/// ```
#[derive(Debug)]
pub struct StorenvyClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// URL construction against the configured base URL.
    urls: UrlBuilder,
    /// Immutable credentials.
    credentials: Credentials,
}

// Verify StorenvyClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StorenvyClient>();
};

impl StorenvyClient {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Access token and optional application credentials
    /// * `config` - Optional configuration for the base URL and user agent
    #[must_use]
    pub fn new(credentials: Credentials, config: Option<&StorenvyConfig>) -> Self {
        let base = config.map_or_else(
            || StorenvyConfig::default().api_base_url().clone(),
            |c| c.api_base_url().clone(),
        );

        if credentials.access_token.is_none() {
            tracing::debug!(
                "Storenvy client created without an access token; every call must supply one"
            );
        }

        Self {
            http_client: HttpClient::new(config),
            urls: UrlBuilder::new(base, credentials.access_token.clone()),
            credentials,
        }
    }

    /// Returns the client's credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the base URL requests are built against.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        self.urls.base()
    }

    /// Builds the request for `endpoint` without sending it.
    ///
    /// GET requests target the `.json` read URL; every other method targets
    /// the write URL. Attributes always travel in the query string.
    ///
    /// # Errors
    ///
    /// - [`RestError::UnresolvedTemplate`], [`RestError::EmptyId`] or
    ///   [`RestError::InvalidId`] if the IDs do not fit the endpoint template
    /// - [`RestError::MissingCredential`] if no access token is available
    pub fn prepare(
        &self,
        method: HttpMethod,
        endpoint: Endpoint,
        ids: &[&str],
        attrs: Option<&AttributeSet>,
        options: &RequestOptions,
    ) -> Result<RequestDescriptor, RestError> {
        let path = endpoint.resolve(ids)?;
        let token = options.access_token.as_ref();
        let url = if method.is_write() {
            self.urls.build_write_url(&path, attrs, token)?
        } else {
            self.urls.build_read_url(&path, attrs, token)?
        };
        Ok(RequestDescriptor::new(method, url))
    }

    /// Builds a GET request for `endpoint` without sending it.
    ///
    /// # Errors
    ///
    /// Same as [`prepare`](Self::prepare).
    pub fn prepare_read(
        &self,
        endpoint: Endpoint,
        ids: &[&str],
        attrs: Option<&AttributeSet>,
        options: &RequestOptions,
    ) -> Result<RequestDescriptor, RestError> {
        self.prepare(HttpMethod::Get, endpoint, ids, attrs, options)
    }

    /// Builds a POST, PUT or DELETE request for `endpoint` without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ReadMethod`] if `method` is [`HttpMethod::Get`],
    /// otherwise the same errors as [`prepare`](Self::prepare).
    pub fn prepare_write(
        &self,
        method: HttpMethod,
        endpoint: Endpoint,
        ids: &[&str],
        attrs: Option<&AttributeSet>,
        options: &RequestOptions,
    ) -> Result<RequestDescriptor, RestError> {
        if !method.is_write() {
            return Err(RestError::ReadMethod { method });
        }
        self.prepare(method, endpoint, ids, attrs, options)
    }

    /// Dispatches a prepared request.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request cannot be completed.
    pub async fn send(&self, descriptor: &RequestDescriptor) -> Result<HttpResponse, RestError> {
        Ok(self.http_client.dispatch(descriptor).await?)
    }

    /// Prepares and sends a GET request.
    pub(crate) async fn read(
        &self,
        endpoint: Endpoint,
        ids: &[&str],
        attrs: Option<&AttributeSet>,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let descriptor = self.prepare_read(endpoint, ids, attrs, options)?;
        self.send(&descriptor).await
    }

    /// Prepares and sends a POST, PUT or DELETE request.
    pub(crate) async fn write(
        &self,
        method: HttpMethod,
        endpoint: Endpoint,
        ids: &[&str],
        attrs: Option<&AttributeSet>,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let descriptor = self.prepare_write(method, endpoint, ids, attrs, options)?;
        self.send(&descriptor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(token: Option<&str>) -> StorenvyClient {
        let credentials = Credentials {
            access_token: token.map(|t| AccessToken::new(t).unwrap()),
            ..Credentials::default()
        };
        StorenvyClient::new(credentials, None)
    }

    #[test]
    fn test_client_uses_production_base_url_by_default() {
        assert_eq!(
            client(Some("t")).base_url().as_ref(),
            "https://api.storenvy.com/v1"
        );
    }

    #[test]
    fn test_client_uses_configured_base_url() {
        let config = StorenvyConfig::builder()
            .api_base_url(BaseUrl::new("http://localhost:4000/v1").unwrap())
            .build()
            .unwrap();
        let client = StorenvyClient::new(Credentials::default(), Some(&config));
        assert_eq!(client.base_url().as_ref(), "http://localhost:4000/v1");
    }

    #[test]
    fn test_prepare_get_order_produces_exact_url() {
        let descriptor = client(Some("1234567abcdef"))
            .prepare(
                HttpMethod::Get,
                Endpoint::Order,
                &["34543"],
                None,
                &RequestOptions::default(),
            )
            .unwrap();
        assert_eq!(descriptor.method, HttpMethod::Get);
        assert_eq!(
            descriptor.url,
            "https://api.storenvy.com/v1/orders/34543.json?access_token=1234567abcdef"
        );
        assert!(descriptor.headers.is_empty());
    }

    #[test]
    fn test_prepare_write_drops_json_suffix() {
        let descriptor = client(Some("t"))
            .prepare(
                HttpMethod::Delete,
                Endpoint::Webhook,
                &["9"],
                None,
                &RequestOptions::default(),
            )
            .unwrap();
        assert_eq!(
            descriptor.url,
            "https://api.storenvy.com/v1/webhooks/9?access_token=t"
        );
    }

    #[test]
    fn test_prepare_with_token_override() {
        let options = RequestOptions::new().access_token(AccessToken::new("override").unwrap());
        let descriptor = client(Some("stored"))
            .prepare(HttpMethod::Get, Endpoint::User, &[], None, &options)
            .unwrap();
        assert!(descriptor.url.ends_with("me.json?access_token=override"));
    }

    #[test]
    fn test_prepare_without_any_token_fails() {
        let result = client(None).prepare(
            HttpMethod::Get,
            Endpoint::User,
            &[],
            None,
            &RequestOptions::default(),
        );
        assert!(matches!(
            result,
            Err(RestError::MissingCredential {
                field: "access_token"
            })
        ));
    }

    #[test]
    fn test_prepare_rejects_wrong_id_count() {
        let result = client(Some("t")).prepare(
            HttpMethod::Put,
            Endpoint::Variant,
            &["1"],
            None,
            &RequestOptions::default(),
        );
        assert!(matches!(result, Err(RestError::UnresolvedTemplate { .. })));
    }

    #[test]
    fn test_prepare_rejects_id_with_fragment_marker() {
        let result = client(Some("tok")).prepare(
            HttpMethod::Get,
            Endpoint::Order,
            &["5#x"],
            None,
            &RequestOptions::default(),
        );
        assert!(matches!(
            result,
            Err(RestError::InvalidId {
                endpoint: Endpoint::Order,
                ..
            })
        ));
    }

    #[test]
    fn test_prepare_rejects_id_that_reaches_another_resource() {
        let result = client(Some("tok")).prepare(
            HttpMethod::Delete,
            Endpoint::Product,
            &["1/variants/2"],
            None,
            &RequestOptions::default(),
        );
        assert!(matches!(result, Err(RestError::InvalidId { .. })));
    }

    #[test]
    fn test_prepare_write_rejects_get() {
        let result = client(Some("t")).prepare_write(
            HttpMethod::Get,
            Endpoint::Webhooks,
            &[],
            None,
            &RequestOptions::default(),
        );
        assert!(matches!(
            result,
            Err(RestError::ReadMethod {
                method: HttpMethod::Get
            })
        ));
    }

    #[test]
    fn test_prepare_write_accepts_write_methods() {
        for method in [HttpMethod::Post, HttpMethod::Put, HttpMethod::Delete] {
            let descriptor = client(Some("t"))
                .prepare_write(method, Endpoint::Webhooks, &[], None, &RequestOptions::default())
                .unwrap();
            assert_eq!(descriptor.method, method);
            assert_eq!(
                descriptor.url,
                "https://api.storenvy.com/v1/webhooks?access_token=t"
            );
        }
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StorenvyClient>();
    }
}
