use serde_json::Value;
use wbtk_types::EntityId;

use crate::error::CacheResult;

/// Cache of entity JSON documents keyed by entity id.
///
/// All implementations must satisfy these invariants:
/// - `load_if_fresh` returns `Ok(None)` for both missing and stale entries;
///   staleness is a cache concern, the caller only distinguishes hit/miss.
/// - `store` replaces any existing entry and resets its freshness.
/// - The cache never interprets documents beyond JSON well-formedness.
/// - All I/O errors are propagated, never silently ignored.
pub trait EntityCache {
    /// Load the cached document for `id` if one exists and is still fresh.
    fn load_if_fresh(&self, id: &EntityId) -> CacheResult<Option<Value>>;

    /// Store (or replace) the document for `id`.
    fn store(&self, id: &EntityId, document: &Value) -> CacheResult<()>;

    /// Drop the entry for `id`, if any. Returns `true` if one existed.
    fn invalidate(&self, id: &EntityId) -> CacheResult<bool>;
}
