//! The word similarity engine.

use tracing::{debug, info};

use tether_core::{ConfigError, SimilarityConfig, Word, WordSimError};

use crate::context::ComparisonContext;
use crate::dictionary::SqliteDictionary;
use crate::measures::{
    DictionaryMeasure, EqualityMeasure, JaroWinklerMeasure, LevenshteinMeasure, NgramMeasure,
    NgramVariant, SimilarityMeasure, VectorMeasure,
};
use crate::strategy::{ComparisonStrategy, ScoringStrategy};
use crate::vector::SqliteVectorStore;

/// Compares terms with a configured set of measures and strategies.
///
/// The measure list and strategies are fixed at construction and shared by
/// reference with every call site; an engine is never mutated once built.
/// Store-backed measures open their databases here, so a bad path fails
/// construction instead of every later comparison.
#[derive(Debug)]
pub struct WordSimEngine {
    measures: Vec<SimilarityMeasure>,
    strategy: ComparisonStrategy,
    scoring: ScoringStrategy,
}

impl WordSimEngine {
    /// Build an engine from validated configuration.
    pub fn from_config(config: &SimilarityConfig) -> Result<Self, WordSimError> {
        config.validate()?;
        let mut measures = Vec::with_capacity(config.measures.len());
        for name in &config.measures {
            measures.push(Self::build_measure(name, config)?);
        }
        let strategy = match config.effective_strategy() {
            "at_least_one" => ComparisonStrategy::AtLeastOne,
            "majority" => ComparisonStrategy::Majority,
            "unanimous" => ComparisonStrategy::Unanimous,
            "average_at_least" => ComparisonStrategy::AverageAtLeast {
                threshold: config.effective_average_threshold(),
            },
            other => {
                return Err(ConfigError::UnknownStrategy {
                    name: other.to_string(),
                }
                .into())
            }
        };
        let engine = Self {
            measures,
            strategy,
            scoring: ScoringStrategy::default(),
        };
        info!(
            measures = ?engine.measures.iter().map(SimilarityMeasure::name).collect::<Vec<_>>(),
            strategy = engine.strategy.name(),
            "word similarity engine ready"
        );
        Ok(engine)
    }

    /// Build an engine over explicit measures.
    pub fn with_measures(
        measures: Vec<SimilarityMeasure>,
        strategy: ComparisonStrategy,
    ) -> Result<Self, WordSimError> {
        if measures.is_empty() {
            return Err(ConfigError::NoMeasures.into());
        }
        Ok(Self {
            measures,
            strategy,
            scoring: ScoringStrategy::default(),
        })
    }

    /// Replace the continuous scoring strategy.
    pub fn with_scoring(mut self, scoring: ScoringStrategy) -> Self {
        self.scoring = scoring;
        self
    }

    fn build_measure(
        name: &str,
        config: &SimilarityConfig,
    ) -> Result<SimilarityMeasure, WordSimError> {
        let measure = match name {
            "equality" => SimilarityMeasure::Equality(EqualityMeasure),
            "levenshtein" => SimilarityMeasure::Levenshtein(LevenshteinMeasure::new(
                config.effective_levenshtein_min_length(),
                config.effective_levenshtein_max_distance(),
                config.effective_levenshtein_threshold(),
            )),
            "jaro_winkler" => SimilarityMeasure::JaroWinkler(JaroWinklerMeasure::new(
                config.effective_jaro_winkler_threshold(),
            )),
            "ngram" => {
                let variant = match config.effective_ngram_variant() {
                    "positional" => NgramVariant::Positional,
                    _ => NgramVariant::Lucene,
                };
                SimilarityMeasure::Ngram(NgramMeasure::new(
                    variant,
                    config.effective_ngram_size(),
                    config.effective_ngram_threshold(),
                ))
            }
            "dictionary" => {
                let path = config.dictionary_path.as_ref().ok_or_else(|| {
                    ConfigError::MissingStorePath {
                        measure: "dictionary".to_string(),
                    }
                })?;
                let dictionary = SqliteDictionary::open(path)?;
                SimilarityMeasure::DictionaryLookup(DictionaryMeasure::new(
                    Box::new(dictionary),
                    config.effective_dictionary_threshold(),
                ))
            }
            "vector" => {
                let path = config.vector_path.as_ref().ok_or_else(|| {
                    ConfigError::MissingStorePath {
                        measure: "vector".to_string(),
                    }
                })?;
                let store = SqliteVectorStore::open(path)?;
                SimilarityMeasure::VectorEmbedding(VectorMeasure::new(
                    Box::new(store),
                    config.effective_vector_threshold(),
                    config.effective_vector_cache_capacity(),
                    config.effective_vector_retries(),
                ))
            }
            other => {
                return Err(ConfigError::UnknownMeasure {
                    name: other.to_string(),
                }
                .into())
            }
        };
        Ok(measure)
    }

    /// Whether two terms are similar under the configured strategy.
    pub fn are_similar(&self, first: &str, second: &str) -> bool {
        self.are_similar_with(&ComparisonContext::of(first, second), self.strategy)
    }

    /// Whether two rich words are similar under the configured strategy.
    pub fn are_words_similar(&self, first: &Word, second: &Word, lemmatize: bool) -> bool {
        self.are_similar_with(
            &ComparisonContext::of_words(first, second, lemmatize),
            self.strategy,
        )
    }

    /// Boolean similarity with an explicit strategy.
    ///
    /// Equal terms short-circuit to similar. Pairs whose whitespace token
    /// counts differ are pruned before any measure runs; phrase shapes that
    /// do not line up are dissimilar regardless of measure opinions.
    pub fn are_similar_with(
        &self,
        ctx: &ComparisonContext<'_>,
        strategy: ComparisonStrategy,
    ) -> bool {
        if ctx.first_term() == ctx.second_term() {
            return true;
        }
        if !token_shapes_match(ctx) {
            debug!(
                first = ctx.first_term(),
                second = ctx.second_term(),
                "token shape mismatch, pruned"
            );
            return false;
        }
        strategy.decide(ctx, &self.measures)
    }

    /// Continuous similarity in [0, 1] under the configured scoring
    /// strategy. The token shape pre-filter does not apply here; ranking
    /// callers get graceful degradation instead of hard zeros.
    pub fn similarity(&self, first: &str, second: &str) -> f64 {
        self.similarity_with(&ComparisonContext::of(first, second), self.scoring)
    }

    /// Continuous similarity with an explicit scoring strategy.
    pub fn similarity_with(&self, ctx: &ComparisonContext<'_>, scoring: ScoringStrategy) -> f64 {
        if ctx.first_term() == ctx.second_term() {
            return 1.0;
        }
        scoring.score(ctx, &self.measures)
    }

    pub fn measures(&self) -> &[SimilarityMeasure] {
        &self.measures
    }

    pub fn strategy(&self) -> ComparisonStrategy {
        self.strategy
    }
}

fn token_shapes_match(ctx: &ComparisonContext<'_>) -> bool {
    ctx.first_term().split_whitespace().count() == ctx.second_term().split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_engine() -> WordSimEngine {
        WordSimEngine::from_config(&SimilarityConfig::default()).unwrap()
    }

    #[test]
    fn test_equal_terms_short_circuit() {
        let engine =
            WordSimEngine::with_measures(
                vec![SimilarityMeasure::JaroWinkler(JaroWinklerMeasure::new(1.1))],
                ComparisonStrategy::Unanimous,
            )
            .unwrap();
        // an impossible threshold proves no measure ran
        assert!(engine.are_similar("same", "same"));
        assert_eq!(engine.similarity("same", "same"), 1.0);
    }

    #[test]
    fn test_token_shape_prefilter() {
        let engine = default_engine();
        assert!(!engine.are_similar("alpha beta", "alpha"));
        assert!(!engine.are_similar("alpha", "alpha beta"));
    }

    #[test]
    fn test_prefilter_skipped_for_scores() {
        let engine = default_engine();
        assert!(engine.similarity("alpha beta", "alpha") > 0.0);
    }

    #[test]
    fn test_default_config_builds_three_measures() {
        let engine = default_engine();
        assert_eq!(engine.measures().len(), 3);
        assert_eq!(engine.strategy(), ComparisonStrategy::AtLeastOne);
    }

    #[test]
    fn test_close_pair_is_similar_by_default() {
        let engine = default_engine();
        assert!(engine.are_similar("storage", "storrage"));
        assert!(!engine.are_similar("storage", "network"));
    }

    #[test]
    fn test_lemmatized_words_compare_by_lemma() {
        let engine = default_engine();
        let first = Word::with_lemma("services", "service", 0, 0);
        let second = Word::with_lemma("service", "service", 0, 1);
        assert!(engine.are_words_similar(&first, &second, true));
    }

    #[test]
    fn test_empty_measures_rejected() {
        let result = WordSimEngine::with_measures(Vec::new(), ComparisonStrategy::AtLeastOne);
        assert!(matches!(
            result,
            Err(WordSimError::Config(ConfigError::NoMeasures))
        ));
    }

    #[test]
    fn test_missing_store_fails_construction() {
        let config = SimilarityConfig {
            measures: vec!["vector".to_string()],
            vector_path: Some("/nonexistent/words.sqlite".into()),
            ..SimilarityConfig::default()
        };
        let result = WordSimEngine::from_config(&config);
        assert!(matches!(result, Err(WordSimError::StoreNotFound { .. })));
    }
}
