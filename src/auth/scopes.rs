//! OAuth scope handling for the Storenvy API.
//!
//! Storenvy has a fixed set of scopes. `user` is always granted; the two
//! store scopes are requested on top of it.

use std::fmt;

/// The scopes an application requests during authorization.
///
/// The scope string always starts with `user` and lists the store scopes
/// after it, separated by spaces:
///
/// ```rust
/// use storenvy_api::AuthScopes;
///
/// assert_eq!(AuthScopes::new().to_scope_string(), "user");
/// assert_eq!(
///     AuthScopes::new().store_read().store_write().to_scope_string(),
///     "user store_read store_write"
/// );
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AuthScopes {
    /// Read access to the store (orders, products, ...).
    pub store_read: bool,
    /// Write access to the store.
    pub store_write: bool,
}

impl AuthScopes {
    /// Scopes with only `user`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            store_read: false,
            store_write: false,
        }
    }

    /// Requests read access to the store.
    #[must_use]
    pub const fn store_read(mut self) -> Self {
        self.store_read = true;
        self
    }

    /// Requests write access to the store.
    #[must_use]
    pub const fn store_write(mut self) -> Self {
        self.store_write = true;
        self
    }

    /// Renders the scopes as the space-separated `scope` parameter value.
    #[must_use]
    pub fn to_scope_string(self) -> String {
        let mut scope = String::from("user");
        if self.store_read {
            scope.push_str(" store_read");
        }
        if self.store_write {
            scope.push_str(" store_write");
        }
        scope
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_scope_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_scope_is_always_present() {
        assert_eq!(AuthScopes::new().to_scope_string(), "user");
        assert_eq!(AuthScopes::default(), AuthScopes::new());
    }

    #[test]
    fn test_store_scopes_follow_user() {
        assert_eq!(
            AuthScopes::new().store_read().to_scope_string(),
            "user store_read"
        );
        assert_eq!(
            AuthScopes::new().store_write().to_scope_string(),
            "user store_write"
        );
        assert_eq!(
            AuthScopes::new().store_write().store_read().to_string(),
            "user store_read store_write"
        );
    }
}
