//! Strategies combining the verdicts of all configured measures.

use smallvec::SmallVec;

use crate::context::ComparisonContext;
use crate::measures::SimilarityMeasure;

/// How the boolean verdicts of the measures combine into one answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ComparisonStrategy {
    /// Similar when any measure says so.
    AtLeastOne,
    /// Similar when more than half of the measures say so.
    Majority,
    /// Similar only when every measure says so.
    Unanimous,
    /// Similar when the mean continuous score reaches the threshold.
    AverageAtLeast { threshold: f64 },
}

impl ComparisonStrategy {
    pub fn decide(&self, ctx: &ComparisonContext<'_>, measures: &[SimilarityMeasure]) -> bool {
        match self {
            Self::AtLeastOne => measures.iter().any(|m| m.is_similar(ctx)),
            Self::Majority => {
                let similar = measures.iter().filter(|m| m.is_similar(ctx)).count();
                similar * 2 > measures.len()
            }
            Self::Unanimous => measures.iter().all(|m| m.is_similar(ctx)),
            Self::AverageAtLeast { threshold } => {
                ScoringStrategy::Average.score(ctx, measures) >= *threshold
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AtLeastOne => "at_least_one",
            Self::Majority => "majority",
            Self::Unanimous => "unanimous",
            Self::AverageAtLeast { .. } => "average_at_least",
        }
    }
}

/// How the continuous scores of the measures combine into one value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringStrategy {
    #[default]
    Average,
    Maximum,
}

impl ScoringStrategy {
    /// Combined score over all measures.
    ///
    /// The trivial equality measure contributes a degenerate 0/1 score that
    /// would dominate a continuous ranking, so it is excluded unless it is
    /// the only measure configured.
    pub fn score(&self, ctx: &ComparisonContext<'_>, measures: &[SimilarityMeasure]) -> f64 {
        let mut scoring: SmallVec<[&SimilarityMeasure; 8]> =
            measures.iter().filter(|m| !m.is_equality()).collect();
        if scoring.is_empty() {
            scoring = measures.iter().collect();
        }
        if scoring.is_empty() {
            return 0.0;
        }
        match self {
            Self::Average => {
                scoring.iter().map(|m| m.score(ctx)).sum::<f64>() / scoring.len() as f64
            }
            Self::Maximum => scoring.iter().map(|m| m.score(ctx)).fold(0.0, f64::max),
        }
    }
}
