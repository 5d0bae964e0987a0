//! Shipping groups, shipping classes and the rates between them.
//!
//! `rates` and `countries` are passed through as JSON. Arrays and objects
//! are sent as compact JSON text; a string is sent verbatim, so callers
//! holding pre-serialized JSON can pass it as `Value::String`.
//!
//! A shipping rate is keyed by a group ID and a class ID sent as query
//! parameters. Both are required.

use serde_json::Value;

use crate::clients::rest::{RequestOptions, RestError, StorenvyClient};
use crate::clients::{HttpMethod, HttpResponse};
use crate::rest::{AttributeSet, Endpoint};

/// Checks that both halves of a shipping rate key are present.
fn rate_key(
    operation: &'static str,
    shipping_group_id: &str,
    shipping_class_id: &str,
) -> Result<AttributeSet, RestError> {
    if shipping_group_id.trim().is_empty() {
        return Err(RestError::MissingCompoundId {
            operation,
            field: "shipping_group_id",
        });
    }
    if shipping_class_id.trim().is_empty() {
        return Err(RestError::MissingCompoundId {
            operation,
            field: "shipping_class_id",
        });
    }
    Ok(AttributeSet::new()
        .with("shipping_group_id", shipping_group_id)
        .with("shipping_class_id", shipping_class_id))
}

fn rate_update_attrs(
    shipping_group_id: &str,
    shipping_class_id: &str,
    first_item_in_cents: i64,
    additional_item_in_cents: i64,
) -> Result<AttributeSet, RestError> {
    let attrs = rate_key("update_shipping_rate", shipping_group_id, shipping_class_id)?
        .with("first_item_in_cents", first_item_in_cents)
        .with("additional_item_in_cents", additional_item_in_cents);
    attrs.validate_cents("first_item_in_cents")?;
    attrs.validate_cents("additional_item_in_cents")?;
    Ok(attrs)
}

fn class_attrs(name: &str, rates: Value, countries: Value) -> AttributeSet {
    AttributeSet::new()
        .with("name", name)
        .with("rates", rates)
        .with("countries", countries)
}

impl StorenvyClient {
    /// Lists the store's shipping groups.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_shipping_groups(
        &self,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::ShippingGroups, &[], None, options).await
    }

    /// Fetches the shipping group `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_shipping_group(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::ShippingGroup, &[id], None, options).await
    }

    /// Creates a shipping group with its rates.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn create_shipping_group(
        &self,
        name: &str,
        rates: Value,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = AttributeSet::new().with("name", name).with("rates", rates);
        self.write(
            HttpMethod::Post,
            Endpoint::ShippingGroups,
            &[],
            Some(&attrs),
            options,
        )
        .await
    }

    /// Replaces the name and rates of the shipping group `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn update_shipping_group(
        &self,
        id: &str,
        name: &str,
        rates: Value,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = AttributeSet::new().with("name", name).with("rates", rates);
        self.write(
            HttpMethod::Put,
            Endpoint::ShippingGroup,
            &[id],
            Some(&attrs),
            options,
        )
        .await
    }

    /// Deletes the shipping group `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn delete_shipping_group(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(
            HttpMethod::Delete,
            Endpoint::ShippingGroup,
            &[id],
            None,
            options,
        )
        .await
    }

    /// Lists the store's shipping classes.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_shipping_classes(
        &self,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::ShippingClasses, &[], None, options).await
    }

    /// Fetches the shipping class `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_shipping_class(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::ShippingClass, &[id], None, options).await
    }

    /// Creates a shipping class with its rates and destination countries.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn create_shipping_class(
        &self,
        name: &str,
        rates: Value,
        countries: Value,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = class_attrs(name, rates, countries);
        self.write(
            HttpMethod::Post,
            Endpoint::ShippingClasses,
            &[],
            Some(&attrs),
            options,
        )
        .await
    }

    /// Replaces the name, rates and countries of the shipping class `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn update_shipping_class(
        &self,
        id: &str,
        name: &str,
        rates: Value,
        countries: Value,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = class_attrs(name, rates, countries);
        self.write(
            HttpMethod::Put,
            Endpoint::ShippingClass,
            &[id],
            Some(&attrs),
            options,
        )
        .await
    }

    /// Deletes the shipping class `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn delete_shipping_class(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(
            HttpMethod::Delete,
            Endpoint::ShippingClass,
            &[id],
            None,
            options,
        )
        .await
    }

    /// Fetches the rate between a shipping group and a shipping class.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCompoundId`] if either ID is empty; nothing
    /// is sent in that case. Otherwise [`RestError::MissingCredential`]
    /// without a token, or [`RestError::Http`] if the request fails.
    pub async fn get_shipping_rate(
        &self,
        shipping_group_id: &str,
        shipping_class_id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let key = rate_key("get_shipping_rate", shipping_group_id, shipping_class_id)?;
        self.read(Endpoint::ShippingRate, &[], Some(&key), options)
            .await
    }

    /// Sets the rate between a shipping group and a shipping class.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCompoundId`] if either ID is empty,
    /// [`RestError::ValueOutOfRange`] if either amount exceeds
    /// [`MAX_CENTS`](crate::rest::MAX_CENTS), [`RestError::MissingCredential`]
    /// without a token, or [`RestError::Http`] if the request fails.
    pub async fn update_shipping_rate(
        &self,
        shipping_group_id: &str,
        shipping_class_id: &str,
        first_item_in_cents: i64,
        additional_item_in_cents: i64,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = rate_update_attrs(
            shipping_group_id,
            shipping_class_id,
            first_item_in_cents,
            additional_item_in_cents,
        )?;
        self.write(
            HttpMethod::Put,
            Endpoint::ShippingRate,
            &[],
            Some(&attrs),
            options,
        )
        .await
    }
}
