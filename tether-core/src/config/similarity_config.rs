//! Word similarity configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Measure names accepted in `measures`.
pub const KNOWN_MEASURES: &[&str] = &[
    "equality",
    "levenshtein",
    "jaro_winkler",
    "ngram",
    "dictionary",
    "vector",
];

/// Strategy names accepted in `strategy`.
pub const KNOWN_STRATEGIES: &[&str] = &["at_least_one", "majority", "unanimous", "average_at_least"];

/// Configuration for the word similarity engine.
///
/// Unknown measure or strategy names fail validation instead of being
/// silently skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Enabled measures, in evaluation order.
    pub measures: Vec<String>,
    /// Boolean comparison strategy. Default: "at_least_one".
    pub strategy: Option<String>,
    /// Acceptance threshold for the average_at_least strategy. Default: 0.5.
    pub average_threshold: Option<f64>,
    /// Terms shorter than this are compared exactly. Default: 3.
    pub levenshtein_min_length: Option<usize>,
    /// Hard edit distance cutoff. Default: 4.
    pub levenshtein_max_distance: Option<usize>,
    /// Maximum edit distance as a share of the shorter term. Default: 1/3.
    pub levenshtein_threshold: Option<f64>,
    /// Jaro-Winkler acceptance threshold. Default: 0.9.
    pub jaro_winkler_threshold: Option<f64>,
    /// N-gram length. Default: 2.
    pub ngram_size: Option<usize>,
    /// N-gram acceptance threshold. Default: 0.75.
    pub ngram_threshold: Option<f64>,
    /// N-gram distance variant, "lucene" or "positional". Default: "lucene".
    pub ngram_variant: Option<String>,
    /// Dictionary acceptance threshold. Default: 0.4.
    pub dictionary_threshold: Option<f64>,
    /// Path to the similarity dictionary database.
    pub dictionary_path: Option<PathBuf>,
    /// Cosine similarity acceptance threshold. Default: 0.8.
    pub vector_threshold: Option<f64>,
    /// Path to the word vector database.
    pub vector_path: Option<PathBuf>,
    /// Maximum cached word vectors. Default: 10_000.
    pub vector_cache_capacity: Option<u64>,
    /// Retries after a failed vector lookup. Default: 1.
    pub vector_retries: Option<u32>,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            measures: vec![
                "equality".to_string(),
                "levenshtein".to_string(),
                "jaro_winkler".to_string(),
            ],
            strategy: None,
            average_threshold: None,
            levenshtein_min_length: None,
            levenshtein_max_distance: None,
            levenshtein_threshold: None,
            jaro_winkler_threshold: None,
            ngram_size: None,
            ngram_threshold: None,
            ngram_variant: None,
            dictionary_threshold: None,
            dictionary_path: None,
            vector_threshold: None,
            vector_path: None,
            vector_cache_capacity: None,
            vector_retries: None,
        }
    }
}

impl SimilarityConfig {
    /// Load and validate configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.measures.is_empty() {
            return Err(ConfigError::NoMeasures);
        }
        for name in &self.measures {
            if !KNOWN_MEASURES.contains(&name.as_str()) {
                return Err(ConfigError::UnknownMeasure { name: name.clone() });
            }
        }
        if let Some(ref name) = self.strategy {
            if !KNOWN_STRATEGIES.contains(&name.as_str()) {
                return Err(ConfigError::UnknownStrategy { name: name.clone() });
            }
        }
        for (field, value) in [
            ("average_threshold", self.average_threshold),
            ("levenshtein_threshold", self.levenshtein_threshold),
            ("jaro_winkler_threshold", self.jaro_winkler_threshold),
            ("ngram_threshold", self.ngram_threshold),
            ("dictionary_threshold", self.dictionary_threshold),
            ("vector_threshold", self.vector_threshold),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(ConfigError::InvalidThreshold {
                        field: field.to_string(),
                        value: v,
                    });
                }
            }
        }
        if let Some(ref variant) = self.ngram_variant {
            if variant != "lucene" && variant != "positional" {
                return Err(ConfigError::InvalidValue {
                    field: "ngram_variant".to_string(),
                    value: variant.clone(),
                });
            }
        }
        if let Some(size) = self.ngram_size {
            if size == 0 {
                return Err(ConfigError::InvalidValue {
                    field: "ngram_size".to_string(),
                    value: "0".to_string(),
                });
            }
        }
        if self.measure_enabled("dictionary") && self.dictionary_path.is_none() {
            return Err(ConfigError::MissingStorePath {
                measure: "dictionary".to_string(),
            });
        }
        if self.measure_enabled("vector") && self.vector_path.is_none() {
            return Err(ConfigError::MissingStorePath {
                measure: "vector".to_string(),
            });
        }
        Ok(())
    }

    pub fn measure_enabled(&self, name: &str) -> bool {
        self.measures.iter().any(|m| m == name)
    }

    /// Returns the effective strategy name, defaulting to "at_least_one".
    pub fn effective_strategy(&self) -> &str {
        self.strategy.as_deref().unwrap_or("at_least_one")
    }

    /// Returns the effective average threshold, defaulting to 0.5.
    pub fn effective_average_threshold(&self) -> f64 {
        self.average_threshold.unwrap_or(0.5)
    }

    /// Returns the effective Levenshtein minimum length, defaulting to 3.
    pub fn effective_levenshtein_min_length(&self) -> usize {
        self.levenshtein_min_length.unwrap_or(3)
    }

    /// Returns the effective Levenshtein distance cutoff, defaulting to 4.
    pub fn effective_levenshtein_max_distance(&self) -> usize {
        self.levenshtein_max_distance.unwrap_or(4)
    }

    /// Returns the effective Levenshtein threshold, defaulting to 1/3.
    pub fn effective_levenshtein_threshold(&self) -> f64 {
        self.levenshtein_threshold.unwrap_or(1.0 / 3.0)
    }

    /// Returns the effective Jaro-Winkler threshold, defaulting to 0.9.
    pub fn effective_jaro_winkler_threshold(&self) -> f64 {
        self.jaro_winkler_threshold.unwrap_or(0.9)
    }

    /// Returns the effective n-gram size, defaulting to 2.
    pub fn effective_ngram_size(&self) -> usize {
        self.ngram_size.unwrap_or(2)
    }

    /// Returns the effective n-gram threshold, defaulting to 0.75.
    pub fn effective_ngram_threshold(&self) -> f64 {
        self.ngram_threshold.unwrap_or(0.75)
    }

    /// Returns the effective n-gram variant, defaulting to "lucene".
    pub fn effective_ngram_variant(&self) -> &str {
        self.ngram_variant.as_deref().unwrap_or("lucene")
    }

    /// Returns the effective dictionary threshold, defaulting to 0.4.
    pub fn effective_dictionary_threshold(&self) -> f64 {
        self.dictionary_threshold.unwrap_or(0.4)
    }

    /// Returns the effective vector threshold, defaulting to 0.8.
    pub fn effective_vector_threshold(&self) -> f64 {
        self.vector_threshold.unwrap_or(0.8)
    }

    /// Returns the effective vector cache capacity, defaulting to 10_000.
    pub fn effective_vector_cache_capacity(&self) -> u64 {
        self.vector_cache_capacity.unwrap_or(10_000)
    }

    /// Returns the effective vector retry count, defaulting to 1.
    pub fn effective_vector_retries(&self) -> u32 {
        self.vector_retries.unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimilarityConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.effective_strategy(), "at_least_one");
        assert_eq!(config.effective_levenshtein_min_length(), 3);
    }

    #[test]
    fn test_from_toml_str_with_overrides() {
        let config = SimilarityConfig::from_toml_str(
            r#"
            measures = ["levenshtein", "jaro_winkler"]
            strategy = "majority"
            jaro_winkler_threshold = 0.85
            "#,
        )
        .unwrap();
        assert_eq!(config.measures.len(), 2);
        assert_eq!(config.effective_strategy(), "majority");
        assert!((config.effective_jaro_winkler_threshold() - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_unknown_measure_rejected() {
        let config = SimilarityConfig::from_toml_str(r#"measures = ["soundex"]"#);
        assert!(matches!(
            config,
            Err(ConfigError::UnknownMeasure { ref name }) if name == "soundex"
        ));
    }

    #[test]
    fn test_unknown_strategy_rejected() {
        let config = SimilarityConfig::from_toml_str(r#"strategy = "plurality""#);
        assert!(matches!(config, Err(ConfigError::UnknownStrategy { .. })));
    }

    #[test]
    fn test_empty_measures_rejected() {
        let config = SimilarityConfig::from_toml_str("measures = []");
        assert!(matches!(config, Err(ConfigError::NoMeasures)));
    }

    #[test]
    fn test_out_of_range_threshold_rejected() {
        let config = SimilarityConfig::from_toml_str("jaro_winkler_threshold = 1.5");
        assert!(matches!(
            config,
            Err(ConfigError::InvalidThreshold { ref field, .. }) if field == "jaro_winkler_threshold"
        ));
    }

    #[test]
    fn test_vector_without_path_rejected() {
        let config = SimilarityConfig::from_toml_str(r#"measures = ["vector"]"#);
        assert!(matches!(
            config,
            Err(ConfigError::MissingStorePath { ref measure }) if measure == "vector"
        ));
    }

    #[test]
    fn test_bad_ngram_variant_rejected() {
        let config = SimilarityConfig::from_toml_str(r#"ngram_variant = "phonetic""#);
        assert!(matches!(config, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let config = SimilarityConfig::from_toml_str("measures = [");
        assert!(matches!(config, Err(ConfigError::ParseFailed(_))));
    }
}
