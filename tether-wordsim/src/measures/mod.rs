//! Pluggable word similarity measures.
//!
//! The measure set is closed: dispatch is an enum, not trait objects, so
//! the engine's hot path stays monomorphic and exhaustive matches catch a
//! forgotten variant at compile time.

pub mod dictionary;
pub mod equality;
pub mod jaro_winkler;
pub mod levenshtein;
pub mod ngram;
pub mod vector;

pub use dictionary::DictionaryMeasure;
pub use equality::EqualityMeasure;
pub use jaro_winkler::JaroWinklerMeasure;
pub use levenshtein::LevenshteinMeasure;
pub use ngram::{NgramMeasure, NgramVariant};
pub use vector::VectorMeasure;

use crate::context::ComparisonContext;

/// One configured word similarity measure.
///
/// Every variant exposes a boolean similarity test and a continuous score
/// in [0, 1] over the same comparison context.
#[derive(Debug)]
pub enum SimilarityMeasure {
    Equality(EqualityMeasure),
    Levenshtein(LevenshteinMeasure),
    JaroWinkler(JaroWinklerMeasure),
    Ngram(NgramMeasure),
    DictionaryLookup(DictionaryMeasure),
    VectorEmbedding(VectorMeasure),
}

impl SimilarityMeasure {
    pub fn is_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        match self {
            Self::Equality(measure) => measure.is_similar(ctx),
            Self::Levenshtein(measure) => measure.is_similar(ctx),
            Self::JaroWinkler(measure) => measure.is_similar(ctx),
            Self::Ngram(measure) => measure.is_similar(ctx),
            Self::DictionaryLookup(measure) => measure.is_similar(ctx),
            Self::VectorEmbedding(measure) => measure.is_similar(ctx),
        }
    }

    pub fn score(&self, ctx: &ComparisonContext<'_>) -> f64 {
        match self {
            Self::Equality(measure) => measure.score(ctx),
            Self::Levenshtein(measure) => measure.score(ctx),
            Self::JaroWinkler(measure) => measure.score(ctx),
            Self::Ngram(measure) => measure.score(ctx),
            Self::DictionaryLookup(measure) => measure.score(ctx),
            Self::VectorEmbedding(measure) => measure.score(ctx),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Equality(_) => "equality",
            Self::Levenshtein(_) => "levenshtein",
            Self::JaroWinkler(_) => "jaro_winkler",
            Self::Ngram(_) => "ngram",
            Self::DictionaryLookup(_) => "dictionary",
            Self::VectorEmbedding(_) => "vector",
        }
    }

    /// The trivial 0/1 measure gets excluded from continuous scoring when
    /// richer measures are present.
    pub(crate) fn is_equality(&self) -> bool {
        matches!(self, Self::Equality(_))
    }
}
