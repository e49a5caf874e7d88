//! Pharmacy client module: the storefront catalog and the admin panel,
//! built on the `synckit` synchronization kernel.
//!
//! `contract` holds the wire-facing models; `domain` the drafts, the
//! admin panel, and the catalog view; `gateways` the HTTP client
//! implementation of the remote capability; `infra` the persisted
//! session provider.

pub mod contract;
pub mod domain;
pub mod gateways;
pub mod infra;

pub use contract::model::{Product, User};
pub use domain::admin::AdminPanel;
pub use domain::catalog::CatalogView;
pub use domain::draft::{PriceInput, ProductDraft, ProductField, UserDraft, UserField};
pub use domain::ports::CartSink;
pub use gateways::http::{HttpResource, RestClient, RestResource};
pub use infra::session::FileSession;
