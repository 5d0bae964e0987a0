//! Account creation on behalf of an application.
//!
//! Creates a user and their store in one call. The application's ID and
//! secret travel with the request, so the client's [`Credentials`] must
//! carry both.
//!
//! [`Credentials`]: crate::Credentials

use crate::auth::Credentials;
use crate::clients::rest::{RequestOptions, RestError, StorenvyClient};
use crate::clients::{HttpMethod, HttpResponse};
use crate::config::Subdomain;
use crate::rest::{AttributeSet, Endpoint};

/// The user who will own a new account's store.
#[derive(Clone, PartialEq, Eq)]
pub struct AccountOwner {
    /// Login name.
    pub login: String,
    /// Email address.
    pub email: String,
    /// Initial password.
    pub password: String,
}

impl AccountOwner {
    /// Creates an owner.
    #[must_use]
    pub fn new(
        login: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for AccountOwner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountOwner")
            .field("login", &self.login)
            .field("email", &self.email)
            .field("password", &"*****")
            .finish()
    }
}

fn account_attrs(
    credentials: &Credentials,
    name: &str,
    subdomain: &Subdomain,
    owner: &AccountOwner,
) -> Result<AttributeSet, RestError> {
    let app_id = credentials
        .app_id
        .as_ref()
        .ok_or(RestError::MissingCredential { field: "app_id" })?;
    let app_secret = credentials
        .app_secret
        .as_ref()
        .ok_or(RestError::MissingCredential {
            field: "app_secret",
        })?;

    Ok(AttributeSet::new()
        .with("client_id", app_id.as_ref())
        .with("secret", app_secret.as_ref())
        .with("name", name)
        .with("subdomain", subdomain.as_ref())
        .with("owner[login]", owner.login.as_str())
        .with("owner[email]", owner.email.as_str())
        .with("owner[password]", owner.password.as_str()))
}

impl StorenvyClient {
    /// Creates a user and a store for them.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::MissingCredential`] if the client's credentials
    /// lack the application ID or secret, or no access token is available,
    /// and [`RestError::Http`] if the request fails.
    pub async fn create_account(
        &self,
        name: &str,
        subdomain: &Subdomain,
        owner: &AccountOwner,
        options: &RequestOptions,
    ) -> Result<HttpResponse, RestError> {
        let attrs = account_attrs(self.credentials(), name, subdomain, owner)?;
        self.write(
            HttpMethod::Post,
            Endpoint::NewAccount,
            &[],
            Some(&attrs),
            options,
        )
        .await
    }
}
