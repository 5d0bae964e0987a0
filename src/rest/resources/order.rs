//! Orders, their status transitions, line items and fulfillments.

use crate::clients::rest::{RequestOptions, RestError, StorenvyClient};
use crate::clients::{HttpMethod, HttpResponse};
use crate::rest::{AttributeSet, Endpoint};

impl StorenvyClient {
    /// Lists orders, filtered by `attrs` (e.g. `status`, `page`).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_orders(
        &self,
        attrs: &AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::Orders, &[], Some(attrs), options).await
    }

    /// Fetches the order `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_order(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::Order, &[id], None, options).await
    }

    /// Marks the order `id` as shipped (e.g. with a `tracking_number`).
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn ship_order(
        &self,
        id: &str,
        attrs: &AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(HttpMethod::Put, Endpoint::OrderShip, &[id], Some(attrs), options)
            .await
    }

    /// Puts the order `id` on hold.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn hold_order(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(HttpMethod::Put, Endpoint::OrderHold, &[id], None, options)
            .await
    }

    /// Re-opens the order `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn open_order(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(HttpMethod::Put, Endpoint::OrderOpen, &[id], None, options)
            .await
    }

    /// Lists the products in the order `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_order_products(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::OrderProducts, &[id], None, options).await
    }

    /// Lists the variants in the order `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_order_variants(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::OrderVariants, &[id], None, options).await
    }

    /// Updates fulfillment `fulfillment_id` of order `order_id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] if either ID is empty,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn update_fulfillment(
        &self,
        order_id: &str,
        fulfillment_id: &str,
        attrs: &AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(
            HttpMethod::Put,
            Endpoint::Fulfillment,
            &[order_id, fulfillment_id],
            Some(attrs),
            options,
        )
        .await
    }
}
