//! In-memory cache for tests and embedding.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use wbtk_types::EntityId;

use crate::error::CacheResult;
use crate::traits::EntityCache;

/// HashMap-based cache. Entries never expire; use `invalidate` to evict.
#[derive(Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Value>>,
}

impl MemoryCache {
    /// Create a new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached documents.
    pub fn len(&self) -> usize {
        self.entries.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.read().expect("lock poisoned").is_empty()
    }

    /// Remove all entries.
    pub fn clear(&self) {
        self.entries.write().expect("lock poisoned").clear();
    }
}

impl EntityCache for MemoryCache {
    fn load_if_fresh(&self, id: &EntityId) -> CacheResult<Option<Value>> {
        let entries = self.entries.read().expect("lock poisoned");
        Ok(entries.get(id.as_str()).cloned())
    }

    fn store(&self, id: &EntityId, document: &Value) -> CacheResult<()> {
        let mut entries = self.entries.write().expect("lock poisoned");
        entries.insert(id.as_str().to_string(), document.clone());
        Ok(())
    }

    fn invalidate(&self, id: &EntityId) -> CacheResult<bool> {
        let mut entries = self.entries.write().expect("lock poisoned");
        Ok(entries.remove(id.as_str()).is_some())
    }
}

impl std::fmt::Debug for MemoryCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryCache")
            .field("entry_count", &self.len())
            .finish()
    }
}
