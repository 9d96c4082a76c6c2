//! Word-similarity errors.

use super::config_error::ConfigError;

/// Errors from the word-similarity stores and engine construction. Lookup
/// misses are not errors; these cover real store and payload failures.
#[derive(Debug, thiserror::Error)]
pub enum WordSimError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sqlite error: {message}")]
    Sqlite { message: String },

    #[error("Store not found at {path}")]
    StoreNotFound { path: String },

    #[error("Malformed vector payload for word '{word}': {detail}")]
    MalformedVector { word: String, detail: String },

    #[error("Malformed vector file at line {line}: {detail}")]
    MalformedImport { line: u64, detail: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
