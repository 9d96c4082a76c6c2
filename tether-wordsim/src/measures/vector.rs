//! Word embedding similarity measure.

use std::sync::Arc;

use tracing::warn;

use crate::context::ComparisonContext;
use crate::vector::{cosine_similarity, VectorCache, VectorStore};

/// Cosine similarity over cached word embeddings.
///
/// Every term goes through the cache; the backing store is hit at most once
/// per distinct term, including for words the store does not know (their
/// miss is cached as the empty sentinel vector). A store failure is retried
/// a bounded number of times, logged, and scored 0.0 without caching, so a
/// recovered store serves the next lookup normally.
pub struct VectorMeasure {
    store: Box<dyn VectorStore>,
    cache: VectorCache,
    threshold: f64,
    retries: u32,
}

impl VectorMeasure {
    pub fn new(
        store: Box<dyn VectorStore>,
        threshold: f64,
        cache_capacity: u64,
        retries: u32,
    ) -> Self {
        Self {
            store,
            cache: VectorCache::new(cache_capacity),
            threshold,
            retries,
        }
    }

    pub fn is_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        self.score(ctx) >= self.threshold
    }

    pub fn score(&self, ctx: &ComparisonContext<'_>) -> f64 {
        let Some(first) = self.cached_vector(ctx.first_term()) else {
            return 0.0;
        };
        let Some(second) = self.cached_vector(ctx.second_term()) else {
            return 0.0;
        };
        if first.is_empty() || second.is_empty() {
            // no embedding on at least one side
            return 0.0;
        }
        cosine_similarity(&first, &second).clamp(0.0, 1.0)
    }

    pub fn cache(&self) -> &VectorCache {
        &self.cache
    }

    /// Vector for `term`, consulting the cache first. `None` means the
    /// store failed even after retries.
    fn cached_vector(&self, term: &str) -> Option<Arc<Vec<f32>>> {
        self.cache.get_or_load(term, || self.load(term))
    }

    fn load(&self, term: &str) -> Option<Vec<f32>> {
        for attempt in 0..=self.retries {
            match self.store.vector_of(term) {
                Ok(found) => return Some(found.unwrap_or_default()),
                Err(e) => {
                    warn!(term, attempt, error = %e, "vector lookup failed");
                }
            }
        }
        None
    }
}

impl std::fmt::Debug for VectorMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorMeasure")
            .field("threshold", &self.threshold)
            .field("retries", &self.retries)
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}
