//! HTTP client types for Storenvy API communication.
//!
//! This module provides the transport layer shared by the authenticated and
//! public clients.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async dispatcher that sends one request per call
//! - [`RequestDescriptor`]: A fully resolved request (method, URL, headers)
//! - [`HttpResponse`]: The status, headers and buffered body of a response
//! - [`ResponseBody`]: The body as text, or the explicit empty outcome
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`rest::StorenvyClient`]: The authenticated REST client
//! - [`public::PublicClient`]: The anonymous storefront client
//!
//! # Example
//!
//! ```rust,ignore
//! use storenvy_api::clients::{HttpClient, HttpMethod, RequestDescriptor};
//!
//! let client = HttpClient::new(None);
//! let descriptor = RequestDescriptor::new(
//!     HttpMethod::Get,
//!     "https://api.storenvy.com/v1/me.json?access_token=1234567abcdef",
//! );
//!
//! let response = client.dispatch(&descriptor).await?;
//! println!("{} {}", response.code, response.text());
//! ```
//!
//! # Delivery
//!
//! The dispatcher makes a single attempt per call, with no retry or timeout.
//! Every HTTP status is delivered as a response; only transport failures are
//! errors. Callers that want non-2xx statuses as errors call
//! [`HttpResponse::error_for_status`].

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod public;
pub mod rest;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{HttpMethod, RequestDescriptor};
pub use http_response::{HttpResponse, ResponseBody};

// Re-export client types at the clients module level
pub use public::{Pagination, PublicClient};
pub use rest::{RequestOptions, RestError, StorenvyClient};
