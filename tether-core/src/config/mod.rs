//! Configuration system for Tether.
//! TOML-based, explicit structs validated at construction.

pub mod linker_config;
pub mod similarity_config;

pub use linker_config::LinkerConfig;
pub use similarity_config::SimilarityConfig;
