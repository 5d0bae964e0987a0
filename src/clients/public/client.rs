use crate::clients::rest::RestError;
use crate::clients::{HttpClient, HttpMethod, HttpResponse, RequestDescriptor};
use crate::config::{BaseUrl, StorenvyConfig, Subdomain};
use crate::rest::Endpoint;

/// Page selection for public list reads.
///
/// Unset and zero fields are left out of the URL.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Page number.
    pub page: Option<u32>,
    /// Items per page.
    pub per_page: Option<u32>,
}

impl Pagination {
    /// Creates a pagination that selects nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            page: None,
            per_page: None,
        }
    }

    /// Sets the page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of items per page.
    #[must_use]
    pub const fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Renders the query string, including the leading `?`, or nothing if
    /// no field is set.
    fn to_query_string(self) -> String {
        let params: Vec<String> = [("page", self.page), ("per_page", self.per_page)]
            .into_iter()
            .filter_map(|(key, value)| {
                value.filter(|&v| v != 0).map(|v| format!("{key}={v}"))
            })
            .collect();
        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Client for anonymous storefront reads.
///
/// Requests go to `<scheme>://<subdomain>.<public_host>/`. When the
/// configuration sets a proxy host, they go to the proxy instead, with a
/// `Host` header naming the store.
#[derive(Debug)]
pub struct PublicClient {
    http_client: HttpClient,
    scheme: String,
    host: String,
    proxy_host: Option<BaseUrl>,
}

// Verify PublicClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PublicClient>();
};

impl PublicClient {
    /// Creates a new public client.
    #[must_use]
    pub fn new(config: Option<&StorenvyConfig>) -> Self {
        let defaults = StorenvyConfig::default();
        let config = config.unwrap_or(&defaults);

        Self {
            http_client: HttpClient::new(Some(config)),
            scheme: config.public_scheme().to_string(),
            host: config.public_host().to_string(),
            proxy_host: config.proxy_host().cloned(),
        }
    }

    /// Builds the request for a public read without sending it.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::UnresolvedTemplate`], [`RestError::EmptyId`] or
    /// [`RestError::InvalidId`] if the IDs do not fit the endpoint.
    pub fn prepare(
        &self,
        subdomain: &Subdomain,
        endpoint: Endpoint,
        ids: &[&str],
        pagination: Pagination,
    ) -> Result<RequestDescriptor, RestError> {
        let path = endpoint.resolve(ids)?;
        let store_host = format!("{subdomain}.{}", self.host);
        let query = pagination.to_query_string();

        let descriptor = match &self.proxy_host {
            Some(proxy) => RequestDescriptor::new(
                HttpMethod::Get,
                format!("{}.json{query}", proxy.join(&path)),
            )
            .header("Host", store_host),
            None => RequestDescriptor::new(
                HttpMethod::Get,
                format!("{}://{store_host}/{path}.json{query}", self.scheme),
            ),
        };
        Ok(descriptor)
    }

    async fn retrieve(
        &self,
        subdomain: &Subdomain,
        endpoint: Endpoint,
        ids: &[&str],
        pagination: Pagination,
    ) -> Result<HttpResponse, RestError> {
        let descriptor = self.prepare(subdomain, endpoint, ids, pagination)?;
        Ok(self.http_client.dispatch(&descriptor).await?)
    }

    /// Fetches a store's public details.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails.
    pub async fn get_store_info(&self, subdomain: &Subdomain) -> Result<HttpResponse, RestError> {
        self.retrieve(subdomain, Endpoint::Store, &[], Pagination::new())
            .await
    }

    /// Lists a store's products.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails.
    pub async fn get_products(
        &self,
        subdomain: &Subdomain,
        pagination: &Pagination,
    ) -> Result<HttpResponse, RestError> {
        self.retrieve(subdomain, Endpoint::Products, &[], *pagination)
            .await
    }

    /// Fetches one of a store's products.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_product(
        &self,
        subdomain: &Subdomain,
        id: &str,
    ) -> Result<HttpResponse, RestError> {
        self.retrieve(subdomain, Endpoint::Product, &[id], Pagination::new())
            .await
    }

    /// Lists a store's collections.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the request fails.
    pub async fn get_collections(
        &self,
        subdomain: &Subdomain,
        pagination: &Pagination,
    ) -> Result<HttpResponse, RestError> {
        self.retrieve(subdomain, Endpoint::Collections, &[], *pagination)
            .await
    }

    /// Fetches one of a store's collections.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_collection(
        &self,
        subdomain: &Subdomain,
        id: &str,
    ) -> Result<HttpResponse, RestError> {
        self.retrieve(subdomain, Endpoint::Collection, &[id], Pagination::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Subdomain {
        Subdomain::new("my-shop").unwrap()
    }

    #[test]
    fn test_pagination_query_string() {
        assert_eq!(Pagination::new().to_query_string(), "");
        assert_eq!(Pagination::new().page(2).to_query_string(), "?page=2");
        assert_eq!(
            Pagination::new().per_page(50).to_query_string(),
            "?per_page=50"
        );
        assert_eq!(
            Pagination::new().page(2).per_page(50).to_query_string(),
            "?page=2&per_page=50"
        );
    }

    #[test]
    fn test_pagination_skips_zero_values() {
        assert_eq!(Pagination::new().page(0).to_query_string(), "");
        assert_eq!(
            Pagination::new().page(0).per_page(25).to_query_string(),
            "?per_page=25"
        );
        assert_eq!(Pagination::new().page(3).per_page(0).to_query_string(), "?page=3");
    }

    #[test]
    fn test_prepare_uses_store_subdomain() {
        let client = PublicClient::new(None);
        let descriptor = client
            .prepare(&store(), Endpoint::Store, &[], Pagination::new())
            .unwrap();
        assert_eq!(descriptor.url, "http://my-shop.storenvy.com/store.json");
        assert!(descriptor.headers.is_empty());
    }

    #[test]
    fn test_prepare_with_id_and_pagination() {
        let client = PublicClient::new(None);
        let descriptor = client
            .prepare(&store(), Endpoint::Product, &["77"], Pagination::new())
            .unwrap();
        assert_eq!(descriptor.url, "http://my-shop.storenvy.com/products/77.json");

        let descriptor = client
            .prepare(
                &store(),
                Endpoint::Collections,
                &[],
                Pagination::new().page(3).per_page(10),
            )
            .unwrap();
        assert_eq!(
            descriptor.url,
            "http://my-shop.storenvy.com/collections.json?page=3&per_page=10"
        );
    }

    #[test]
    fn test_prepare_through_proxy_sets_host_header() {
        let config = StorenvyConfig::builder()
            .proxy_host(BaseUrl::new("http://127.0.0.1:9000").unwrap())
            .build()
            .unwrap();
        let client = PublicClient::new(Some(&config));
        let descriptor = client
            .prepare(&store(), Endpoint::Products, &[], Pagination::new().page(1))
            .unwrap();
        assert_eq!(descriptor.url, "http://127.0.0.1:9000/products.json?page=1");
        assert_eq!(
            descriptor.headers,
            vec![("Host".to_string(), "my-shop.storenvy.com".to_string())]
        );
    }

    #[test]
    fn test_prepare_uses_configured_scheme_and_host() {
        let config = StorenvyConfig::builder()
            .public_scheme("https")
            .public_host("example.test")
            .build()
            .unwrap();
        let client = PublicClient::new(Some(&config));
        let descriptor = client
            .prepare(&store(), Endpoint::Store, &[], Pagination::new())
            .unwrap();
        assert_eq!(descriptor.url, "https://my-shop.example.test/store.json");
    }

    #[test]
    fn test_prepare_rejects_empty_id() {
        let client = PublicClient::new(None);
        let result = client.prepare(&store(), Endpoint::Collection, &[""], Pagination::new());
        assert!(matches!(result, Err(RestError::EmptyId { .. })));
    }
}
