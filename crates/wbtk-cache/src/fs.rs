//! Filesystem cache: one JSON file per entity, freshness by file age.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::Value;
use tracing::debug;
use wbtk_types::EntityId;

use crate::error::{CacheError, CacheResult};
use crate::traits::EntityCache;

/// Environment variable overriding the cache directory.
pub const CACHE_PATH_VAR: &str = "WBTK_CACHE_PATH";

/// Environment variable overriding the time-to-live, in seconds.
pub const CACHE_TTL_VAR: &str = "WBTK_CACHE_TTL_SECS";

/// Default time-to-live for cached documents: one day.
pub const DEFAULT_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// A cache directory holding one `<id>.json` file per entity.
///
/// Freshness is judged by the file's modification time against the
/// configured time-to-live; a stale file is treated as a miss and left in
/// place until the next `store` overwrites it.
#[derive(Debug)]
pub struct FsCache {
    root: PathBuf,
    ttl: Duration,
}

impl FsCache {
    /// Open (or create) a cache directory with the given time-to-live.
    pub fn open(root: impl Into<PathBuf>, ttl: Duration) -> CacheResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root, ttl })
    }

    /// Open the default cache: `~/.cache/wbtk` with [`DEFAULT_TTL`], both
    /// overridable through [`CACHE_PATH_VAR`] and [`CACHE_TTL_VAR`].
    pub fn from_env() -> CacheResult<Self> {
        let root = std::env::var(CACHE_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_cache_dir());
        let ttl = std::env::var(CACHE_TTL_VAR)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TTL);
        Self::open(root, ttl)
    }

    /// The cache directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn path_for(&self, id: &EntityId) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    fn is_fresh(&self, path: &Path) -> CacheResult<bool> {
        let modified = fs::metadata(path)?.modified()?;
        match modified.elapsed() {
            Ok(age) => Ok(age < self.ttl),
            // A file modified "in the future" (clock skew) counts as fresh.
            Err(_) => Ok(true),
        }
    }
}

fn default_cache_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".cache")
        .join("wbtk")
}

impl EntityCache for FsCache {
    fn load_if_fresh(&self, id: &EntityId) -> CacheResult<Option<Value>> {
        let path = self.path_for(id);
        if !path.exists() {
            return Ok(None);
        }
        if !self.is_fresh(&path)? {
            debug!(id = %id, "cache entry stale");
            return Ok(None);
        }
        let raw = fs::read_to_string(&path)?;
        let document = serde_json::from_str(&raw).map_err(|source| CacheError::Corrupt {
            id: id.to_string(),
            source,
        })?;
        debug!(id = %id, "cache hit");
        Ok(Some(document))
    }

    fn store(&self, id: &EntityId, document: &Value) -> CacheResult<()> {
        let path = self.path_for(id);
        fs::write(&path, document.to_string())?;
        debug!(id = %id, path = %path.display(), "cache store");
        Ok(())
    }

    fn invalidate(&self, id: &EntityId) -> CacheResult<bool> {
        let path = self.path_for(id);
        if path.exists() {
            fs::remove_file(&path)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
