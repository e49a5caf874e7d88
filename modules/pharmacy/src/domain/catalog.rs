use std::sync::Arc;

use tracing::{instrument, warn};

use synckit::{filter, ClientError, CollectionStore, ResourceClient};

use crate::contract::model::Product;
use crate::domain::draft::ProductDraft;
use crate::domain::ports::CartSink;

/// Storefront catalog: the product collection plus a live search query,
/// with a cart port at the boundary.
///
/// The query only ever derives a view; the underlying store keeps the
/// server-provided order and contents untouched.
pub struct CatalogView<C>
where
    C: ResourceClient<Product, Draft = ProductDraft>,
{
    client: Arc<C>,
    products: CollectionStore<Product>,
    query: String,
    last_error: Option<ClientError>,
}

impl<C> CatalogView<C>
where
    C: ResourceClient<Product, Draft = ProductDraft>,
{
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            products: CollectionStore::new(),
            query: String::new(),
            last_error: None,
        }
    }

    /// Fetch the catalog. On failure the previous contents stay on
    /// display and the error is kept as a non-fatal indicator.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.client.list().await {
            Ok(items) => {
                self.products.load(items);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "catalog fetch failed, keeping prior view");
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The filtered view for the current query, recomputed on demand.
    pub fn visible(&self) -> Vec<&Product> {
        filter(self.products.items(), &self.query).collect()
    }

    pub fn products(&self) -> &CollectionStore<Product> {
        &self.products
    }

    pub fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }

    /// Hand a full product value to the cart. Returns `false` for a
    /// stale id no longer in the catalog.
    pub fn add_to_cart(&self, id: u64, cart: &dyn CartSink) -> bool {
        match self.products.get(id) {
            Some(product) => {
                cart.add_to_cart(product.clone());
                true
            }
            None => false,
        }
    }
}
