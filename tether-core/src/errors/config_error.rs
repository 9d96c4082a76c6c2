//! Configuration errors.

/// Errors raised while loading or validating configuration.
/// Unknown names and out-of-range values are rejected at construction; no
/// default is substituted for a misconfigured field.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML: {0}")]
    ParseFailed(String),

    #[error("Unknown similarity measure: {name}")]
    UnknownMeasure { name: String },

    #[error("Unknown comparison strategy: {name}")]
    UnknownStrategy { name: String },

    #[error("No similarity measures configured")]
    NoMeasures,

    #[error("Invalid threshold {value} for {field}: must be within [0, 1]")]
    InvalidThreshold { field: String, value: f64 },

    #[error("Invalid value '{value}' for {field}")]
    InvalidValue { field: String, value: String },

    #[error("Missing store path for measure: {measure}")]
    MissingStorePath { measure: String },
}
