//! Operations of the authenticated client, one module per resource family.
//!
//! Each module adds methods to [`StorenvyClient`](crate::StorenvyClient).
//! Every method takes a [`RequestOptions`](crate::RequestOptions) as its last
//! argument and resolves to the raw [`HttpResponse`](crate::HttpResponse).
//!
//! | Module | Operations |
//! |---|---|
//! | `user` | `get_user_info` |
//! | `store` | store details, visits, page templates |
//! | `order` | orders, ship/hold/open, line items, fulfillments |
//! | `product` | products |
//! | `variant` | product variants |
//! | `collection` | collections |
//! | `shipping` | shipping groups, classes and rates |
//! | `webhook` | webhooks |
//! | `account` | account creation |
//!
//! Operations that take fixed arguments alongside an [`AttributeSet`]
//! append the fixed arguments after the caller's attributes.
//!
//! [`AttributeSet`]: crate::rest::AttributeSet

mod account;
mod collection;
mod order;
mod product;
mod shipping;
mod store;
mod user;
mod variant;
mod webhook;

pub use account::AccountOwner;
