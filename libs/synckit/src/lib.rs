//! Client-side resource synchronization kernel.
//!
//! The pieces fit together like this: a [`CollectionStore`] holds the
//! authoritative in-memory list for one resource type; an [`EditSession`]
//! runs the add/edit modal lifecycle over a transient [`Draft`]; a
//! [`ResourceClient`] is the capability performing remote CRUD; and a
//! [`ResourceController`] ties the three together so the store is only
//! ever reconciled from confirmed remote responses.
//!
//! Nothing in here locks: the controller is the single writer for its
//! store, and every mutation happens inside its own `&mut self` methods
//! on one cooperative task.

pub mod client;
pub mod controller;
pub mod edit;
pub mod error;
pub mod filter;
pub mod resource;
pub mod session;
pub mod store;

pub use client::ResourceClient;
pub use controller::ResourceController;
pub use edit::{Draft, EditPhase, EditSession};
pub use error::ClientError;
pub use filter::filter;
pub use resource::Resource;
pub use session::{guard, Access, Credential, Role, SessionProvider, StaticSession};
pub use store::CollectionStore;
