//! Anonymous client for the public Storenvy storefront API.
//!
//! Every store exposes read-only JSON under its own subdomain, with no
//! access token:
//!
//! ```text
//! http://<subdomain>.storenvy.com/<resource>.json[?page=N&per_page=M]
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use storenvy_api::clients::public::{Pagination, PublicClient};
//! use storenvy_api::Subdomain;
//!
//! let client = PublicClient::new(None);
//! let store = Subdomain::new("my-shop")?;
//!
//! let products = client.get_products(&store, &Pagination::new().page(2)).await?;
//! println!("{}", products.text());
//! ```

mod client;

pub use client::{Pagination, PublicClient};
