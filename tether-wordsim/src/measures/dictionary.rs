//! Dictionary-backed similarity measure.

use tracing::warn;

use crate::context::ComparisonContext;
use crate::dictionary::SimilarityDictionary;

/// Similarity from a pre-computed dictionary of term pairs.
///
/// Store failures are logged and scored 0.0, so a broken dictionary
/// degrades recall without aborting a comparison run. Construction is the
/// fail-fast point for a missing store.
pub struct DictionaryMeasure {
    dictionary: Box<dyn SimilarityDictionary>,
    threshold: f64,
}

impl DictionaryMeasure {
    pub fn new(dictionary: Box<dyn SimilarityDictionary>, threshold: f64) -> Self {
        Self {
            dictionary,
            threshold,
        }
    }

    pub fn is_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        self.score(ctx) >= self.threshold
    }

    pub fn score(&self, ctx: &ComparisonContext<'_>) -> f64 {
        match self
            .dictionary
            .similarity_of(ctx.first_term(), ctx.second_term())
        {
            Ok(Some(similarity)) => similarity.clamp(0.0, 1.0),
            Ok(None) => 0.0,
            Err(e) => {
                warn!(error = %e, "dictionary lookup failed, scoring 0");
                0.0
            }
        }
    }
}

impl std::fmt::Debug for DictionaryMeasure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DictionaryMeasure")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}
