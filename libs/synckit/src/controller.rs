use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::client::ResourceClient;
use crate::edit::{EditPhase, EditSession};
use crate::error::ClientError;
use crate::resource::Resource;
use crate::store::CollectionStore;

/// Single writer for one resource type: owns the collection store, the
/// edit session, and the remote client, and reconciles the store only
/// from confirmed remote responses.
///
/// Every mutation runs inside a `&mut self` method on one cooperative
/// task, so a submit completion always lands in the store before any
/// later read, and dropping the controller discards any result a
/// pending call would have applied.
pub struct ResourceController<T, C>
where
    T: Resource,
    C: ResourceClient<T>,
{
    client: Arc<C>,
    store: CollectionStore<T>,
    edit: EditSession<T, C::Draft>,
    /// Last non-fatal failure from a list or delete call, kept for a UI
    /// indicator. Cleared by the next successful refresh.
    last_error: Option<ClientError>,
}

impl<T, C> ResourceController<T, C>
where
    T: Resource,
    C: ResourceClient<T>,
{
    pub fn new(client: Arc<C>) -> Self {
        Self {
            client,
            store: CollectionStore::new(),
            edit: EditSession::new(),
            last_error: None,
        }
    }

    /// Fetch the full listing and replace the store with it. On failure
    /// the store keeps its prior contents and the error is recorded as
    /// a non-fatal indicator; there is no automatic retry.
    #[instrument(skip(self))]
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        match self.client.list().await {
            Ok(items) => {
                debug!(count = items.len(), "collection refreshed");
                self.store.load(items);
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "listing failed, keeping prior collection");
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn open_for_create(&mut self) {
        self.edit.open_for_create();
    }

    /// Open an edit session over the stored item with identity `id`.
    /// Returns `false` when the id is not in the store (stale row).
    pub fn open_for_edit(&mut self, id: T::Id) -> bool {
        match self.store.get(id) {
            Some(item) => {
                // The session deep-copies; the store keeps ownership.
                let item = item.clone();
                self.edit.open_for_edit(&item);
                true
            }
            None => false,
        }
    }

    pub fn update_field(&mut self, field: <C::Draft as crate::edit::Draft<T>>::Field) {
        self.edit.update_field(field);
    }

    pub fn cancel(&mut self) {
        self.edit.cancel();
    }

    /// Resolve the open edit session against the remote source: create
    /// when no identity is attached, update otherwise. The store is
    /// mutated only after the call confirms; any failure sends the
    /// session back to composing with the draft intact.
    #[instrument(skip(self))]
    pub async fn submit(&mut self) -> Result<(), ClientError> {
        if self.edit.phase() != EditPhase::Composing {
            debug!("submit with no open edit session ignored");
            return Ok(());
        }
        let (draft, target) = self.edit.begin_submit()?;
        let outcome = match target {
            Some(id) => self.client.update(id, &draft).await,
            None => self.client.create(&draft).await,
        };
        match outcome {
            Ok(item) => {
                match target {
                    Some(id) => self.store.replace(id, item),
                    None => self.store.insert(item),
                }
                self.edit.resolve_ok();
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "submit failed, draft preserved");
                self.edit.resolve_err(e.clone());
                Err(e)
            }
        }
    }

    /// Delete `id` remotely, then drop it from the store. A remote
    /// not-found is recovered by a no-op: nothing is surfaced and the
    /// store keeps its contents until the next refresh.
    #[instrument(skip_all, fields(id = %id))]
    pub async fn remove(&mut self, id: T::Id) -> Result<(), ClientError> {
        match self.client.delete(id).await {
            Ok(()) => {
                self.store.remove(id);
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                debug!(id = %id, "already absent upstream, nothing to delete");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "delete failed, collection untouched");
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    pub fn items(&self) -> &[T] {
        self.store.items()
    }

    pub fn store(&self) -> &CollectionStore<T> {
        &self.store
    }

    pub fn edit(&self) -> &EditSession<T, C::Draft> {
        &self.edit
    }

    pub fn phase(&self) -> EditPhase {
        self.edit.phase()
    }

    pub fn last_error(&self) -> Option<&ClientError> {
        self.last_error.as_ref()
    }
}
