//! Products.
//!
//! Prices are whole amounts in cents and may not exceed
//! [`MAX_CENTS`](crate::rest::MAX_CENTS). Out-of-range amounts are rejected
//! before the request is sent.

use crate::clients::rest::{RequestOptions, RestError, StorenvyClient};
use crate::clients::{HttpMethod, HttpResponse};
use crate::rest::{AttributeSet, Endpoint};

/// Merges the fixed arguments of a new product after the caller's attributes.
fn new_product_attrs(name: &str, cents: i64, attrs: AttributeSet) -> Result<AttributeSet, RestError> {
    let attrs = attrs.with("name", name).with("cents", cents);
    attrs.validate_cents("cents")?;
    Ok(attrs)
}

impl StorenvyClient {
    /// Lists products, filtered by `attrs`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_products(
        &self,
        attrs: &AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::Products, &[], Some(attrs), options).await
    }

    /// Fetches the product `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_product(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::Product, &[id], None, options).await
    }

    /// Creates a product.
    ///
    /// `name` and `cents` are appended after the caller's attributes,
    /// replacing them if `attrs` already holds those keys.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ValueOutOfRange`] if `cents` exceeds
    /// [`MAX_CENTS`](crate::rest::MAX_CENTS), [`RestError::MissingCredential`]
    /// without a token, or [`RestError::Http`] if the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let response = client
    ///     .create_product("awesome product", 1_000_000, AttributeSet::new(), &RequestOptions::default())
    ///     .await?;
    /// ```
    pub async fn create_product(
        &self,
        name: &str,
        cents: i64,
        attrs: AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = new_product_attrs(name, cents, attrs)?;
        self.write(HttpMethod::Post, Endpoint::Products, &[], Some(&attrs), options)
            .await
    }

    /// Updates the product `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::ValueOutOfRange`] if `attrs` holds a `cents`
    /// above [`MAX_CENTS`](crate::rest::MAX_CENTS), [`RestError::EmptyId`]
    /// for an empty `id`, [`RestError::MissingCredential`] without a token,
    /// or [`RestError::Http`] if the request fails.
    pub async fn update_product(
        &self,
        id: &str,
        attrs: &AttributeSet,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        attrs.validate_cents("cents")?;
        self.write(HttpMethod::Put, Endpoint::Product, &[id], Some(attrs), options)
            .await
    }

    /// Deletes the product `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn delete_product(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(HttpMethod::Delete, Endpoint::Product, &[id], None, options)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::MAX_CENTS;

    #[test]
    fn test_new_product_attrs_appends_fixed_arguments_last() {
        let attrs = AttributeSet::new().with("description", "soft");
        let attrs = new_product_attrs("awesome product", 1_000_000, attrs).unwrap();
        assert_eq!(
            attrs.to_query_string(),
            "&description=soft&name=awesome%20product&cents=1000000"
        );
    }

    #[test]
    fn test_new_product_attrs_overrides_caller_name_in_place() {
        let attrs = AttributeSet::new().with("name", "old").with("on_sale", true);
        let attrs = new_product_attrs("new", 5, attrs).unwrap();
        assert_eq!(attrs.to_query_string(), "&name=new&on_sale=true&cents=5");
    }

    #[test]
    fn test_new_product_attrs_cents_bound() {
        assert!(new_product_attrs("p", MAX_CENTS, AttributeSet::new()).is_ok());
        assert!(matches!(
            new_product_attrs("p", MAX_CENTS + 1, AttributeSet::new()),
            Err(RestError::ValueOutOfRange { field: "cents", .. })
        ));
    }
}
