use crate::resource::Resource;

/// Authoritative in-memory list for one resource type.
///
/// Every operation is a pure, synchronous transformation of the prior
/// collection: it fully applies or leaves the collection untouched.
/// Server-provided order is preserved; identities stay unique as long as
/// the remote source assigns them uniquely.
#[derive(Debug, Clone)]
pub struct CollectionStore<T: Resource> {
    items: Vec<T>,
}

impl<T: Resource> Default for CollectionStore<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Resource> CollectionStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection with a fresh listing.
    pub fn load(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// Append a freshly created item. The remote source guarantees the
    /// assigned identity is new; a duplicate would mean the backend
    /// echoed a record we already hold, so it is dropped.
    pub fn insert(&mut self, item: T) {
        if self.get(item.id()).is_some() {
            tracing::debug!(id = %item.id(), "insert of already-present id ignored");
            return;
        }
        self.items.push(item);
    }

    /// Substitute the element with identity `id`, keeping its position.
    /// A stale identity is a no-op, not an error.
    pub fn replace(&mut self, id: T::Id, item: T) {
        if let Some(slot) = self.items.iter_mut().find(|it| it.id() == id) {
            *slot = item;
        } else {
            tracing::debug!(id = %id, "replace of absent id ignored");
        }
    }

    /// Delete the element with identity `id`. Idempotent: removing an
    /// absent id leaves the collection unchanged.
    pub fn remove(&mut self, id: T::Id) {
        self.items.retain(|it| it.id() != id);
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|it| it.id() == id)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
