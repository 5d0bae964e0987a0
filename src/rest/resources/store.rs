//! The authenticated user's store: details, visit statistics and page
//! templates.

use crate::clients::rest::{RequestOptions, RestError, StorenvyClient};
use crate::clients::{HttpMethod, HttpResponse};
use crate::config::Subdomain;
use crate::rest::{AttributeSet, Endpoint};

/// Attributes for a new store, in the order the API documents them.
fn new_store_attrs(name: &str, subdomain: &Subdomain, paypal_email: &str) -> AttributeSet {
    AttributeSet::new()
        .with("name", name)
        .with("subdomain", subdomain.as_ref())
        .with("paypal_email", paypal_email)
}

impl StorenvyClient {
    /// Fetches the store of the token's owner.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_store_info(&self, options: &RequestOptions) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::Store, &[], None, options).await
    }

    /// Creates a store.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn create_store(
        &self,
        name: &str,
        subdomain: &Subdomain,
        paypal_email: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = new_store_attrs(name, subdomain, paypal_email);
        self.write(HttpMethod::Post, Endpoint::NewStore, &[], Some(&attrs), options)
            .await
    }

    /// Updates the store with `attrs`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn update_store_info(
        &self,
        attrs: &AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(HttpMethod::Put, Endpoint::Store, &[], Some(attrs), options)
            .await
    }

    /// Fetches visit statistics for the store.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_store_visits(
        &self,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::StoreVisits, &[], None, options).await
    }

    /// Fetches marketplace visit statistics for the store.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_store_marketplace_visits(
        &self,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::StoreMarketplaceVisits, &[], None, options)
            .await
    }

    /// Lists the store's page templates.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_store_templates(
        &self,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::StoreTemplates, &[], None, options).await
    }

    /// Creates a page template named `name`.
    ///
    /// `name` is appended after the caller's attributes, replacing any
    /// `name` already in `attrs`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn create_store_template(
        &self,
        name: &str,
        attrs: AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = attrs.with("name", name);
        self.write(
            HttpMethod::Post,
            Endpoint::StoreTemplates,
            &[],
            Some(&attrs),
            options,
        )
        .await
    }

    /// Updates the page template `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn update_store_template(
        &self,
        id: &str,
        attrs: &AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(
            HttpMethod::Put,
            Endpoint::StoreTemplate,
            &[id],
            Some(attrs),
            options,
        )
        .await
    }
}
