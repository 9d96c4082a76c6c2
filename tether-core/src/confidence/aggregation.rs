//! Aggregation functions over claim scores.

use serde::{Deserialize, Serialize};

/// How a set of claim scores collapses into one confidence value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationFunction {
    #[default]
    Mean,
    Min,
    Max,
    RootMeanSquare,
    HarmonicMean,
}

impl AggregationFunction {
    /// Collapses `scores` into a single value. Empty input yields 0.0.
    ///
    /// The harmonic mean of a set containing 0.0 is defined as 0.0, which
    /// keeps it from dividing by zero and matches its use as a strict
    /// penalizer of low scores.
    pub fn reduce(&self, scores: &[f64]) -> f64 {
        if scores.is_empty() {
            return 0.0;
        }
        let n = scores.len() as f64;
        match self {
            Self::Mean => scores.iter().sum::<f64>() / n,
            Self::Min => scores.iter().fold(f64::INFINITY, |acc, &s| acc.min(s)),
            Self::Max => scores.iter().fold(f64::NEG_INFINITY, |acc, &s| acc.max(s)),
            Self::RootMeanSquare => (scores.iter().map(|s| s * s).sum::<f64>() / n).sqrt(),
            Self::HarmonicMean => {
                if scores.iter().any(|&s| s == 0.0) {
                    return 0.0;
                }
                n / scores.iter().map(|s| 1.0 / s).sum::<f64>()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_zero() {
        for f in [
            AggregationFunction::Mean,
            AggregationFunction::Min,
            AggregationFunction::Max,
            AggregationFunction::RootMeanSquare,
            AggregationFunction::HarmonicMean,
        ] {
            assert_eq!(f.reduce(&[]), 0.0);
        }
    }

    #[test]
    fn test_mean() {
        assert!((AggregationFunction::Mean.reduce(&[0.9, 0.4]) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn test_min_max() {
        let scores = [0.2, 0.8, 0.5];
        assert_eq!(AggregationFunction::Min.reduce(&scores), 0.2);
        assert_eq!(AggregationFunction::Max.reduce(&scores), 0.8);
    }

    #[test]
    fn test_root_mean_square() {
        let rms = AggregationFunction::RootMeanSquare.reduce(&[0.6, 0.8]);
        assert!((rms - 0.7071067811865476).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_mean() {
        let hm = AggregationFunction::HarmonicMean.reduce(&[0.5, 1.0]);
        assert!((hm - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_harmonic_mean_with_zero_is_zero() {
        assert_eq!(AggregationFunction::HarmonicMean.reduce(&[0.0, 0.9]), 0.0);
    }

    #[test]
    fn test_single_score_is_identity() {
        for f in [
            AggregationFunction::Mean,
            AggregationFunction::Min,
            AggregationFunction::Max,
            AggregationFunction::RootMeanSquare,
            AggregationFunction::HarmonicMean,
        ] {
            assert!((f.reduce(&[0.42]) - 0.42).abs() < 1e-12);
        }
    }
}
