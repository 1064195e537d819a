//! Entity JSON caching for the Wikibase toolkit.
//!
//! A cache avoids refetching unchanged entities: documents are stored by
//! entity id and served back until a time-to-live elapses, after which the
//! entry is a miss and the caller refetches and re-stores.
//!
//! All backends implement the [`EntityCache`] trait:
//!
//! - [`FsCache`] — one JSON file per entity under a cache directory,
//!   freshness judged by file age
//! - [`MemoryCache`] — `HashMap`-based store for tests and embedding

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{CacheError, CacheResult};
pub use fs::{FsCache, CACHE_PATH_VAR, CACHE_TTL_VAR, DEFAULT_TTL};
pub use memory::MemoryCache;
pub use traits::EntityCache;
