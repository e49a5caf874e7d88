use crate::resource::Resource;

/// Derive a filtered view of a collection from a live query string.
///
/// Matches items whose display name contains `query` as a
/// case-insensitive substring. The view is lazy and restartable; the
/// source slice is never mutated, and the empty query yields the full
/// collection in its original order.
pub fn filter<'a, T: Resource>(
    items: &'a [T],
    query: &str,
) -> impl Iterator<Item = &'a T> + 'a {
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(move |it| it.display_name().to_lowercase().contains(&needle))
}
