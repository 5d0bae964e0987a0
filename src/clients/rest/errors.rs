//! REST-specific error types for the Storenvy API client.
//!
//! # Error Handling
//!
//! Configuration errors and precondition violations are raised before any
//! network I/O, so a request that fails with one of them was never sent:
//!
//! - [`RestError::MissingCredential`]: No access token (or application credential) available
//! - [`RestError::UnresolvedTemplate`]: Wrong number of IDs for an endpoint template
//! - [`RestError::EmptyId`]: An ID was empty
//! - [`RestError::InvalidId`]: An ID would change the path or URL structure
//! - [`RestError::ReadMethod`]: A write was prepared with GET
//! - [`RestError::MissingCompoundId`]: An operation keyed by two IDs got fewer
//! - [`RestError::ValueOutOfRange`]: A money amount exceeds the 32-bit bound
//!
//! Transport failures arrive as [`RestError::Http`].
//!
//! # Example
//!
//! ```rust,ignore
//! use storenvy_api::clients::rest::RestError;
//!
//! match client.get_order("34543", &RequestOptions::default()).await {
//!     Ok(response) => println!("{}", response.text()),
//!     Err(RestError::MissingCredential { field }) => println!("missing {field}"),
//!     Err(RestError::Http(e)) => println!("HTTP error: {e}"),
//!     Err(other) => println!("invalid request: {other}"),
//! }
//! ```

use crate::clients::{HttpError, HttpMethod};
use crate::rest::Endpoint;
use thiserror::Error;

/// Error type for REST API operations.
///
/// # Example
///
/// ```rust
/// use storenvy_api::clients::rest::RestError;
///
/// let error = RestError::MissingCredential { field: "access_token" };
/// assert!(error.to_string().contains("access_token"));
/// ```
#[derive(Debug, Error)]
pub enum RestError {
    /// A credential needed to build the request is not available.
    #[error("Missing credential '{field}'. Provide it on the client's credentials or in the request options.")]
    MissingCredential {
        /// The name of the missing credential.
        field: &'static str,
    },

    /// The number of IDs supplied does not match the endpoint template.
    #[error("Endpoint '{endpoint}' needs {expected} id(s) but {supplied} were supplied")]
    UnresolvedTemplate {
        /// The endpoint being resolved.
        endpoint: Endpoint,
        /// Number of placeholders in the template.
        expected: usize,
        /// Number of IDs supplied.
        supplied: usize,
    },

    /// An ID supplied for an endpoint template was empty.
    #[error("Endpoint '{endpoint}' was given an empty id")]
    EmptyId {
        /// The endpoint being resolved.
        endpoint: Endpoint,
    },

    /// An ID contains a character that would leave its path segment.
    #[error("Endpoint '{endpoint}' was given id '{id}', which contains '/', '?' or '#'")]
    InvalidId {
        /// The endpoint being resolved.
        endpoint: Endpoint,
        /// The rejected ID.
        id: String,
    },

    /// A write was prepared with a read method.
    #[error("Cannot prepare a write request with method '{method}'")]
    ReadMethod {
        /// The rejected method.
        method: HttpMethod,
    },

    /// An operation keyed by several IDs is missing one of them.
    #[error("Must pass {field} into {operation}")]
    MissingCompoundId {
        /// The operation that was called.
        operation: &'static str,
        /// The missing ID parameter.
        field: &'static str,
    },

    /// A numeric attribute exceeds the largest value the API accepts.
    #[error("{field} cannot be more than {max} (got {value})")]
    ValueOutOfRange {
        /// The attribute name.
        field: &'static str,
        /// The rejected value, as it would have been sent.
        value: String,
        /// The largest accepted value.
        max: i64,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credential_message() {
        let error = RestError::MissingCredential {
            field: "access_token",
        };
        assert!(error.to_string().contains("Missing credential 'access_token'"));
    }

    #[test]
    fn test_unresolved_template_message() {
        let error = RestError::UnresolvedTemplate {
            endpoint: Endpoint::Fulfillment,
            expected: 2,
            supplied: 1,
        };
        assert_eq!(
            error.to_string(),
            "Endpoint 'orders/{id}/fulfillments/{id}' needs 2 id(s) but 1 were supplied"
        );
    }

    #[test]
    fn test_invalid_id_message() {
        let error = RestError::InvalidId {
            endpoint: Endpoint::Product,
            id: "1/variants/2".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Endpoint 'products/{id}' was given id '1/variants/2', which contains '/', '?' or '#'"
        );
    }

    #[test]
    fn test_missing_compound_id_message() {
        let error = RestError::MissingCompoundId {
            operation: "get_shipping_rate",
            field: "shipping_class_id",
        };
        assert_eq!(
            error.to_string(),
            "Must pass shipping_class_id into get_shipping_rate"
        );
    }

    #[test]
    fn test_value_out_of_range_message() {
        let error = RestError::ValueOutOfRange {
            field: "cents",
            value: "2147483648".to_string(),
            max: 2_147_483_647,
        };
        assert_eq!(
            error.to_string(),
            "cents cannot be more than 2147483647 (got 2147483648)"
        );
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = RestError::EmptyId {
            endpoint: Endpoint::Order,
        };
        let _: &dyn std::error::Error = &error;
    }
}
