//! Trace-link generation errors.

/// Errors from trace-link assembly and export.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Model mismatch: {0}")]
    ModelMismatch(String),
}
