//! Word similarity measures and the comparison engine.
//!
//! A [`WordSimEngine`] runs a configured list of similarity measures over
//! term pairs and combines their verdicts with a comparison strategy
//! (boolean) or a scoring strategy (continuous, in `[0, 1]`). Measures
//! range from cheap edit-distance checks to sqlite-backed dictionary and
//! word embedding lookups; list-level helpers build phrase similarity and
//! candidate selection on top of the engine.

pub mod context;
pub mod dictionary;
pub mod engine;
pub mod lists;
pub mod measures;
mod pragmas;
pub mod strategy;
pub mod vector;

pub use context::ComparisonContext;
pub use engine::WordSimEngine;
pub use lists::{are_word_lists_similar, select_most_similar};
pub use measures::SimilarityMeasure;
pub use strategy::{ComparisonStrategy, ScoringStrategy};
