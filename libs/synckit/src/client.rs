use async_trait::async_trait;

use crate::edit::Draft;
use crate::error::ClientError;
use crate::resource::Resource;

/// Remote CRUD capability for one resource type.
///
/// This is the only suspension point in the sync layer: everything else
/// is a synchronous transformation. Implementations decide transport,
/// timeouts, and authentication; the kernel only sees the four calls
/// and the [`ClientError`] taxonomy.
#[async_trait]
pub trait ResourceClient<T: Resource>: Send + Sync {
    /// Draft payload this client accepts for create/update. Carries no
    /// identity; the path parameter does on update.
    type Draft: Draft<T>;

    async fn list(&self) -> Result<Vec<T>, ClientError>;

    async fn create(&self, draft: &Self::Draft) -> Result<T, ClientError>;

    async fn update(&self, id: T::Id, draft: &Self::Draft) -> Result<T, ClientError>;

    async fn delete(&self, id: T::Id) -> Result<(), ClientError>;
}
