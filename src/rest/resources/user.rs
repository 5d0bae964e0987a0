//! The authenticated user.

use crate::clients::rest::{RequestOptions, RestError, StorenvyClient};
use crate::clients::HttpResponse;
use crate::rest::Endpoint;

impl StorenvyClient {
    /// Fetches the user that owns the access token.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] without a token, or
    /// [`RestError::Http`] if the request fails.
    pub async fn get_user_info(&self, options: &RequestOptions) -> Result<HttpResponse, RestError> {
        self.read(Endpoint::User, &[], None, options).await
    }
}
