/// A synchronizable resource: something with a stable, server-assigned
/// identity and a human-readable display name.
///
/// The identity is what [`crate::CollectionStore`] keys its mutations on;
/// the display name is what [`crate::filter`] matches search queries
/// against.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Server-assigned identity, unique within one collection.
    type Id: Copy + PartialEq + Eq + std::fmt::Display + Send + Sync + 'static;

    fn id(&self) -> Self::Id;

    fn display_name(&self) -> &str;
}
