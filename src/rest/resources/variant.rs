//! Product variants. Every variant is addressed by its product ID and its own
//! ID, in that order.

use crate::clients::rest::{RequestOptions, RestError, StorenvyClient};
use crate::clients::{HttpMethod, HttpResponse};
use crate::rest::{AttributeSet, Endpoint};

impl StorenvyClient {
    /// Creates a variant of `product_id`.
    ///
    /// `name`, `full_quantity` and `in_stock` are appended after the
    /// caller's attributes, replacing them if already present.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `product_id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn create_variant(
        &self,
        product_id: &str,
        name: &str,
        full_quantity: u32,
        in_stock: bool,
        attrs: AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = attrs
            .with("name", name)
            .with("full_quantity", full_quantity)
            .with("in_stock", in_stock);
        self.write(
            HttpMethod::Post,
            Endpoint::Variants,
            &[product_id],
            Some(&attrs),
            options,
        )
        .await
    }

    /// Fetches variant `variant_id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] if either ID is empty,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_variant(
        &self,
        product_id: &str,
        variant_id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::Variant, &[product_id, variant_id], None, options)
            .await
    }

    /// Updates variant `variant_id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] if either ID is empty,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn update_variant(
        &self,
        product_id: &str,
        variant_id: &str,
        attrs: &AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(
            HttpMethod::Put,
            Endpoint::Variant,
            &[product_id, variant_id],
            Some(attrs),
            options,
        )
        .await
    }

    /// Deletes variant `variant_id` of `product_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] if either ID is empty,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn delete_variant(
        &self,
        product_id: &str,
        variant_id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(
            HttpMethod::Delete,
            Endpoint::Variant,
            &[product_id, variant_id],
            None,
            options,
        )
        .await
    }
}
