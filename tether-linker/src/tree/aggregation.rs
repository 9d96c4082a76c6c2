//! Aggregation functions folding child results per endpoint tuple.

use rustc_hash::FxHashMap;

use tether_core::EndpointTuple;

use super::result::NodeResult;

/// How an aggregation node combines its children's scores for one tuple.
///
/// Children that do not claim a tuple contribute neither value nor weight;
/// a tuple's aggregate reflects only the children that scored it. An
/// `Average` over a single claiming child therefore reproduces the child's
/// score exactly.
#[derive(Debug, Clone)]
pub enum Aggregation {
    /// Highest score over the claiming children.
    Maximum,
    /// Weighted arithmetic mean over the claiming children. Equal weights
    /// when `weights` is `None`; when present, the list is positional per
    /// child and its length is checked at node construction.
    Average { weights: Option<Vec<f64>> },
}

impl Aggregation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Maximum => "maximum",
            Self::Average { .. } => "average",
        }
    }

    pub(crate) fn combine(&self, children: &[&NodeResult]) -> NodeResult {
        match self {
            Self::Maximum => {
                let mut scores: FxHashMap<EndpointTuple, f64> = FxHashMap::default();
                for child in children {
                    for (tuple, score) in child.iter() {
                        scores
                            .entry(tuple)
                            .and_modify(|current| *current = current.max(score))
                            .or_insert(score);
                    }
                }
                NodeResult::from_scores(scores)
            }
            Self::Average { weights } => {
                let mut sums: FxHashMap<EndpointTuple, (f64, f64)> = FxHashMap::default();
                for (position, child) in children.iter().enumerate() {
                    let weight = weights.as_ref().map_or(1.0, |list| list[position]);
                    for (tuple, score) in child.iter() {
                        let entry = sums.entry(tuple).or_insert((0.0, 0.0));
                        entry.0 += weight * score;
                        entry.1 += weight;
                    }
                }
                let scores = sums
                    .into_iter()
                    .filter(|&(_, (_, weight_sum))| weight_sum > 0.0)
                    .map(|(tuple, (weighted, weight_sum))| (tuple, weighted / weight_sum))
                    .collect();
                NodeResult::from_scores(scores)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_core::{ArchIndex, CodeIndex};

    fn tuple(arch: u32, code: u32) -> EndpointTuple {
        EndpointTuple::new(ArchIndex(arch), CodeIndex(code))
    }

    fn result_of(entries: &[(EndpointTuple, f64)]) -> NodeResult {
        let mut result = NodeResult::new();
        for &(tuple, score) in entries {
            result.insert(tuple, score);
        }
        result
    }

    #[test]
    fn test_maximum_takes_union_of_claims() {
        let left = result_of(&[(tuple(0, 0), 0.4), (tuple(0, 1), 0.9)]);
        let right = result_of(&[(tuple(0, 0), 0.7)]);

        let combined = Aggregation::Maximum.combine(&[&left, &right]);
        assert_eq!(combined.get(tuple(0, 0)), Some(0.7));
        assert_eq!(combined.get(tuple(0, 1)), Some(0.9));
    }

    #[test]
    fn test_average_over_claiming_children_only() {
        let left = result_of(&[(tuple(0, 0), 0.9), (tuple(0, 1), 0.6)]);
        let right = result_of(&[(tuple(0, 0), 0.4)]);

        let combined = Aggregation::Average { weights: None }.combine(&[&left, &right]);
        assert!((combined.get(tuple(0, 0)).unwrap() - 0.65).abs() < 1e-12);
        // right does not claim (0, 1), so the average is left's score alone
        assert_eq!(combined.get(tuple(0, 1)), Some(0.6));
    }

    #[test]
    fn test_weighted_average() {
        let left = result_of(&[(tuple(0, 0), 1.0)]);
        let right = result_of(&[(tuple(0, 0), 0.0)]);

        let aggregation = Aggregation::Average {
            weights: Some(vec![3.0, 1.0]),
        };
        let combined = aggregation.combine(&[&left, &right]);
        assert!((combined.get(tuple(0, 0)).unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_single_child_average_is_identity() {
        let child = result_of(&[(tuple(0, 0), 0.42), (tuple(1, 2), 0.7)]);
        let combined = Aggregation::Average { weights: None }.combine(&[&child]);
        assert_eq!(combined, child);
    }

    #[test]
    fn test_zero_weight_child_claims_nothing() {
        let left = result_of(&[(tuple(0, 0), 0.9)]);
        let right = result_of(&[(tuple(0, 1), 0.8)]);

        let aggregation = Aggregation::Average {
            weights: Some(vec![1.0, 0.0]),
        };
        let combined = aggregation.combine(&[&left, &right]);
        assert_eq!(combined.get(tuple(0, 0)), Some(0.9));
        // the only claimant has weight zero, so the tuple disappears
        assert_eq!(combined.get(tuple(0, 1)), None);
    }
}
