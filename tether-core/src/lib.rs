//! Core types for the Tether trace-link engine.
//!
//! Tether scores pairs of architecture-side and code-side model elements for
//! the likelihood that they denote the same real-world concept. This crate
//! holds the shared value types (models, words, endpoint tuples, trace
//! links), the multi-claimant confidence accumulator, configuration, and the
//! subsystem error enums. The word similarity engine lives in
//! `tether-wordsim`; the computation tree and link generation in
//! `tether-linker`.

pub mod confidence;
pub mod config;
pub mod errors;
pub mod logging;
pub mod models;

pub use confidence::{AggregationFunction, Claim, Confidence};
pub use config::{LinkerConfig, SimilarityConfig};
pub use errors::{ConfigError, LinkError, WordSimError};
pub use models::{
    ArchIndex, ArchitectureItem, ArchitectureItemKind, ArchitectureModel, CodeIndex, CodeItem,
    CodeItemKind, CodeModel, EndpointTuple, TraceLink, Word,
};
