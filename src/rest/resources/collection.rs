//! Product collections.

use crate::clients::rest::{RequestOptions, RestError, StorenvyClient};
use crate::clients::{HttpMethod, HttpResponse};
use crate::rest::{AttributeSet, Endpoint};

impl StorenvyClient {
    /// Lists the store's collections.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_collections(
        &self,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::Collections, &[], None, options).await
    }

    /// Fetches the collection `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_collection(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::Collection, &[id], None, options).await
    }

    /// Creates a collection named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn create_collection(
        &self,
        name: &str,
        attrs: AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = attrs.with("name", name);
        self.write(
            HttpMethod::Post,
            Endpoint::Collections,
            &[],
            Some(&attrs),
            options,
        )
        .await
    }

    /// Renames and updates the collection `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn update_collection(
        &self,
        id: &str,
        name: &str,
        attrs: AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = attrs.with("name", name);
        self.write(
            HttpMethod::Put,
            Endpoint::Collection,
            &[id],
            Some(&attrs),
            options,
        )
        .await
    }

    /// Deletes the collection `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn delete_collection(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(HttpMethod::Delete, Endpoint::Collection, &[id], None, options)
            .await
    }
}
