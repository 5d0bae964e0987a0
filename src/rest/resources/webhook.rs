//! Webhook subscriptions.
//!
//! `events` is passed through as JSON, typically an array of event names.

use serde_json::Value;

use crate::clients::rest::{RequestOptions, RestError, StorenvyClient};
use crate::clients::{HttpMethod, HttpResponse};
use crate::rest::{AttributeSet, Endpoint};

impl StorenvyClient {
    /// Lists the application's webhooks.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_webhooks(&self, options: &RequestOptions) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::Webhooks, &[], None, options).await
    }

    /// Fetches the webhook `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_webhook(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::Webhook, &[id], None, options).await
    }

    /// Subscribes `url` to `events`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn create_webhook(
        &self,
        url: &str,
        events: Value,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = AttributeSet::new().with("url", url).with("events", events);
        self.write(HttpMethod::Post, Endpoint::Webhooks, &[], Some(&attrs), options)
            .await
    }

    /// Replaces the URL and events of the webhook `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn update_webhook(
        &self,
        id: &str,
        url: &str,
        events: Value,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = AttributeSet::new().with("url", url).with("events", events);
        self.write(HttpMethod::Put, Endpoint::Webhook, &[id], Some(&attrs), options)
            .await
    }

    /// Deletes the webhook `id`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::EmptyId`] for an empty `id`,
    /// [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn delete_webhook(
        &self,
        id: &str,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        self.write(HttpMethod::Delete, Endpoint::Webhook, &[id], None, options)
            .await
    }
}
