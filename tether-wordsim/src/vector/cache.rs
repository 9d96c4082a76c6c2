//! In-memory word vector cache using moka.
//!
//! TinyLFU admission policy, capacity-bounded. Vector lookups dominate the
//! similarity hot path, so every store round-trip saved matters.

use std::sync::Arc;

use moka::sync::Cache;

/// Cache over word embeddings keyed by the exact lookup term.
///
/// Values are shared via `Arc` so hits never copy vector data. A cached
/// empty vector is the miss sentinel for words the backing store does not
/// know; it keeps repeated misses from re-hitting the store.
pub struct VectorCache {
    inner: Cache<String, Arc<Vec<f32>>>,
}

impl VectorCache {
    /// Create a cache holding at most `capacity` vectors.
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: Cache::builder().max_capacity(capacity).build(),
        }
    }

    /// Cached vector for `word`, loading through `load` on a miss.
    ///
    /// Concurrent callers for the same word share a single load. A `None`
    /// from the loader means the load itself failed and is not cached; the
    /// next call retries. Loaders signal a definitive store miss by
    /// returning the empty sentinel vector, which is cached like any hit.
    pub fn get_or_load<F>(&self, word: &str, load: F) -> Option<Arc<Vec<f32>>>
    where
        F: FnOnce() -> Option<Vec<f32>>,
    {
        self.inner
            .optionally_get_with(word.to_string(), || load().map(Arc::new))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.inner.contains_key(word)
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.inner.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.inner.invalidate_all();
    }
}

impl std::fmt::Debug for VectorCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorCache")
            .field("entries", &self.inner.entry_count())
            .finish_non_exhaustive()
    }
}
