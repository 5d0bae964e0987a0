//! Endpoint table for the Storenvy REST API.
//!
//! Every logical resource is an [`Endpoint`] variant with a constant path
//! template. Templates use `{id}` placeholders, filled left to right in the
//! order the IDs are supplied:
//!
//! ```rust
//! use storenvy_api::rest::Endpoint;
//!
//! assert_eq!(Endpoint::Order.resolve(&["34543"]).unwrap(), "orders/34543");
//! assert_eq!(
//!     Endpoint::Fulfillment.resolve(&["12", "34"]).unwrap(),
//!     "orders/12/fulfillments/34"
//! );
//! ```
//!
//! Since the table is an enum, an unknown resource cannot be named. The only
//! resolution failures left are a wrong number of IDs and an empty or
//! malformed ID.

use std::fmt;

use crate::clients::rest::RestError;

/// Placeholder token used in endpoint templates.
pub const PLACEHOLDER: &str = "{id}";

/// Characters an ID may not contain, since each would end its path segment.
const ID_DELIMITERS: [char; 3] = ['/', '?', '#'];

/// A logical Storenvy REST resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The authenticated user (`me`).
    User,
    /// The authenticated user's store.
    Store,
    /// Store creation.
    NewStore,
    /// Store visit statistics.
    StoreVisits,
    /// Marketplace visit statistics.
    StoreMarketplaceVisits,
    /// Store page templates.
    StoreTemplates,
    /// A single store page template.
    StoreTemplate,
    /// Orders.
    Orders,
    /// A single order.
    Order,
    /// Marks an order shipped.
    OrderShip,
    /// Puts an order on hold.
    OrderHold,
    /// Re-opens an order.
    OrderOpen,
    /// A fulfillment of an order (order ID, fulfillment ID).
    Fulfillment,
    /// Products of an order.
    OrderProducts,
    /// Variants of an order.
    OrderVariants,
    /// Products.
    Products,
    /// A single product.
    Product,
    /// Variants of a product.
    Variants,
    /// A single variant (product ID, variant ID).
    Variant,
    /// Collections.
    Collections,
    /// A single collection.
    Collection,
    /// Shipping groups.
    ShippingGroups,
    /// A single shipping group.
    ShippingGroup,
    /// Shipping classes.
    ShippingClasses,
    /// A single shipping class.
    ShippingClass,
    /// The rate for a shipping group and class pair, keyed by query parameters.
    ShippingRate,
    /// Webhooks.
    Webhooks,
    /// A single webhook.
    Webhook,
    /// Account (user and store) creation by an application.
    NewAccount,
}

impl Endpoint {
    /// Every endpoint, in table order.
    pub const ALL: [Self; 29] = [
        Self::User,
        Self::Store,
        Self::NewStore,
        Self::StoreVisits,
        Self::StoreMarketplaceVisits,
        Self::StoreTemplates,
        Self::StoreTemplate,
        Self::Orders,
        Self::Order,
        Self::OrderShip,
        Self::OrderHold,
        Self::OrderOpen,
        Self::Fulfillment,
        Self::OrderProducts,
        Self::OrderVariants,
        Self::Products,
        Self::Product,
        Self::Variants,
        Self::Variant,
        Self::Collections,
        Self::Collection,
        Self::ShippingGroups,
        Self::ShippingGroup,
        Self::ShippingClasses,
        Self::ShippingClass,
        Self::ShippingRate,
        Self::Webhooks,
        Self::Webhook,
        Self::NewAccount,
    ];

    /// Returns the path template for this endpoint.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::User => "me",
            Self::Store => "store",
            Self::NewStore => "stores",
            Self::StoreVisits => "store/visits",
            Self::StoreMarketplaceVisits => "store/marketplace_visits",
            Self::StoreTemplates => "store/templates",
            Self::StoreTemplate => "store/templates/{id}",
            Self::Orders => "orders",
            Self::Order => "orders/{id}",
            Self::OrderShip => "orders/{id}/ship",
            Self::OrderHold => "orders/{id}/hold",
            Self::OrderOpen => "orders/{id}/open",
            Self::Fulfillment => "orders/{id}/fulfillments/{id}",
            Self::OrderProducts => "orders/{id}/products",
            Self::OrderVariants => "orders/{id}/variants",
            Self::Products => "products",
            Self::Product => "products/{id}",
            Self::Variants => "products/{id}/variants",
            Self::Variant => "products/{id}/variants/{id}",
            Self::Collections => "collections",
            Self::Collection => "collections/{id}",
            Self::ShippingGroups => "shipping_groups",
            Self::ShippingGroup => "shipping_groups/{id}",
            Self::ShippingClasses => "shipping_classes",
            Self::ShippingClass => "shipping_classes/{id}",
            Self::ShippingRate => "shipping_rate",
            Self::Webhooks => "webhooks",
            Self::Webhook => "webhooks/{id}",
            Self::NewAccount => "application/stores",
        }
    }

    /// Returns the number of IDs this endpoint's template requires.
    #[must_use]
    pub const fn id_count(self) -> usize {
        match self {
            Self::User
            | Self::Store
            | Self::NewStore
            | Self::StoreVisits
            | Self::StoreMarketplaceVisits
            | Self::StoreTemplates
            | Self::Orders
            | Self::Products
            | Self::Collections
            | Self::ShippingGroups
            | Self::ShippingClasses
            | Self::ShippingRate
            | Self::Webhooks
            | Self::NewAccount => 0,
            Self::Fulfillment | Self::Variant => 2,
            _ => 1,
        }
    }

    /// Resolves the template into a relative path.
    ///
    /// IDs fill placeholders left to right. Substituted text is never
    /// re-scanned, so an ID cannot introduce a placeholder of its own.
    ///
    /// # Errors
    ///
    /// - [`RestError::UnresolvedTemplate`] if the number of IDs differs from
    ///   the number of placeholders
    /// - [`RestError::EmptyId`] if any ID is empty
    /// - [`RestError::InvalidId`] if an ID contains `/`, `?` or `#`
    pub fn resolve(self, ids: &[&str]) -> Result<String, RestError> {
        if ids.len() != self.id_count() {
            return Err(RestError::UnresolvedTemplate {
                endpoint: self,
                expected: self.id_count(),
                supplied: ids.len(),
            });
        }
        if ids.iter().any(|id| id.trim().is_empty()) {
            return Err(RestError::EmptyId { endpoint: self });
        }
        if let Some(id) = ids.iter().find(|id| id.contains(ID_DELIMITERS)) {
            return Err(RestError::InvalidId {
                endpoint: self,
                id: (*id).to_string(),
            });
        }

        let mut segments = self.template().split(PLACEHOLDER);
        let mut path = segments.next().unwrap_or_default().to_string();
        for (segment, id) in segments.zip(ids) {
            path.push_str(id);
            path.push_str(segment);
        }
        Ok(path)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_template_matches_its_id_count() {
        for endpoint in Endpoint::ALL {
            assert_eq!(
                endpoint.template().matches(PLACEHOLDER).count(),
                endpoint.id_count(),
                "{endpoint:?}"
            );
        }
    }

    #[test]
    fn test_table_has_no_duplicate_templates() {
        let mut templates: Vec<_> = Endpoint::ALL.iter().map(|e| e.template()).collect();
        templates.sort_unstable();
        templates.dedup();
        assert_eq!(templates.len(), Endpoint::ALL.len());
    }

    #[test]
    fn test_templates_are_relative() {
        for endpoint in Endpoint::ALL {
            let template = endpoint.template();
            assert!(!template.starts_with('/'), "{template}");
            assert!(!template.ends_with(".json"), "{template}");
            assert!(!template.contains('?'), "{template}");
        }
    }

    #[test]
    fn test_resolve_without_ids() {
        assert_eq!(Endpoint::User.resolve(&[]).unwrap(), "me");
        assert_eq!(
            Endpoint::StoreMarketplaceVisits.resolve(&[]).unwrap(),
            "store/marketplace_visits"
        );
    }

    #[test]
    fn test_resolve_single_id_leaves_no_placeholder() {
        for endpoint in Endpoint::ALL.into_iter().filter(|e| e.id_count() == 1) {
            let path = endpoint.resolve(&["42"]).unwrap();
            assert!(!path.contains(PLACEHOLDER), "{path}");
            assert_eq!(path.matches("42").count(), 1, "{path}");
        }
    }

    #[test]
    fn test_resolve_two_ids_in_declaration_order() {
        assert_eq!(
            Endpoint::Fulfillment.resolve(&["100", "200"]).unwrap(),
            "orders/100/fulfillments/200"
        );
        assert_eq!(
            Endpoint::Variant.resolve(&["7", "8"]).unwrap(),
            "products/7/variants/8"
        );
    }

    #[test]
    fn test_resolve_does_not_rescan_substituted_ids() {
        assert_eq!(
            Endpoint::Variant.resolve(&["{id}", "8"]).unwrap(),
            "products/{id}/variants/8"
        );
    }

    #[test]
    fn test_resolve_rejects_too_few_ids() {
        let result = Endpoint::Fulfillment.resolve(&["100"]);
        assert!(matches!(
            result,
            Err(RestError::UnresolvedTemplate {
                endpoint: Endpoint::Fulfillment,
                expected: 2,
                supplied: 1,
            })
        ));
    }

    #[test]
    fn test_resolve_rejects_too_many_ids() {
        let result = Endpoint::Orders.resolve(&["1"]);
        assert!(matches!(
            result,
            Err(RestError::UnresolvedTemplate {
                expected: 0,
                supplied: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_resolve_rejects_empty_id() {
        let result = Endpoint::Order.resolve(&[""]);
        assert!(matches!(
            result,
            Err(RestError::EmptyId {
                endpoint: Endpoint::Order
            })
        ));
    }

    #[test]
    fn test_resolve_rejects_ids_that_leave_their_segment() {
        for id in ["1/variants/2", "5#x", "5?access_token=other"] {
            let result = Endpoint::Product.resolve(&[id]);
            assert!(
                matches!(
                    &result,
                    Err(RestError::InvalidId { endpoint: Endpoint::Product, id: rejected }) if rejected == id
                ),
                "{id}: {result:?}"
            );
        }
    }

    #[test]
    fn test_resolve_checks_every_id() {
        let result = Endpoint::Fulfillment.resolve(&["100", "2#3"]);
        assert!(matches!(result, Err(RestError::InvalidId { .. })));
    }
}
