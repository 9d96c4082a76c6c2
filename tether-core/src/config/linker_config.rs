//! Trace link generation configuration.

use serde::{Deserialize, Serialize};

use crate::confidence::AggregationFunction;
use crate::errors::ConfigError;

/// Configuration for trace link generation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LinkerConfig {
    /// Minimum confidence for a link to be emitted. Default: 0.5.
    pub accept_threshold: Option<f64>,
    /// Floor applied to heuristic results before aggregation. Default: 0.1.
    pub confidence_floor: Option<f64>,
    /// Name suffixes stripped when comparing names. Default: impl, interface, component.
    #[serde(default)]
    pub name_suffixes: Vec<String>,
    /// Aggregation over claims for one tuple. Default: mean.
    pub aggregator: Option<AggregationFunction>,
}

impl LinkerConfig {
    /// Load and validate configuration from a TOML string.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("accept_threshold", self.accept_threshold),
            ("confidence_floor", self.confidence_floor),
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
        Ok(())
    }

    /// Returns the effective acceptance threshold, defaulting to 0.5.
    pub fn effective_accept_threshold(&self) -> f64 {
        self.accept_threshold.unwrap_or(0.5)
    }

    /// Returns the effective confidence floor, defaulting to 0.1.
    pub fn effective_confidence_floor(&self) -> f64 {
        self.confidence_floor.unwrap_or(0.1)
    }

    /// Returns the effective suffix list; an empty config falls back to the
    /// built-in suffixes.
    pub fn effective_name_suffixes(&self) -> Vec<String> {
        if self.name_suffixes.is_empty() {
            vec![
                "impl".to_string(),
                "interface".to_string(),
                "component".to_string(),
            ]
        } else {
            self.name_suffixes.clone()
        }
    }

    /// Returns the effective aggregation function, defaulting to the mean.
    pub fn effective_aggregator(&self) -> AggregationFunction {
        self.aggregator.unwrap_or_default()
    }
}
