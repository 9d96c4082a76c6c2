//! Claim storage and on-demand aggregation.

use std::fmt;

use smallvec::SmallVec;

use super::AggregationFunction;

/// One agent's statement about a candidate link.
#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    /// Name of the agent that made the claim.
    pub claimant: String,
    pub score: f64,
}

/// Confidence in a candidate link, backed by the full set of claims.
///
/// Claims append in O(1); the aggregate is recomputed on read so that late
/// evidence never invalidates a cached value. Duplicate claimants are kept,
/// each claim counts once.
#[derive(Debug, Clone, Default)]
pub struct Confidence {
    entries: SmallVec<[Claim; 4]>,
    aggregator: AggregationFunction,
}

impl Confidence {
    pub fn new(aggregator: AggregationFunction) -> Self {
        Self {
            entries: SmallVec::new(),
            aggregator,
        }
    }

    /// Confidence holding a single claim.
    pub fn claimed(
        claimant: impl Into<String>,
        score: f64,
        aggregator: AggregationFunction,
    ) -> Self {
        let mut confidence = Self::new(aggregator);
        confidence.add_evidence(claimant, score);
        confidence
    }

    pub fn add_evidence(&mut self, claimant: impl Into<String>, score: f64) {
        self.entries.push(Claim {
            claimant: claimant.into(),
            score,
        });
    }

    /// Aggregate over all stored claims. No claims means 0.0.
    pub fn confidence(&self) -> f64 {
        let scores: SmallVec<[f64; 8]> = self.entries.iter().map(|c| c.score).collect();
        self.aggregator.reduce(&scores)
    }

    /// Copies every claim of `other` into `self`.
    pub fn merge(&mut self, other: &Confidence) {
        self.entries.extend(other.entries.iter().cloned());
    }

    pub fn claims(&self) -> &[Claim] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn aggregator(&self) -> AggregationFunction {
        self.aggregator
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.confidence())
    }
}
