//! Dependent heuristics that reshape a child node's result.

use rustc_hash::FxHashMap;

use tether_core::{ArchIndex, ArchitectureModel, CodeModel};

use super::DependentHeuristic;
use crate::tree::NodeResult;

/// Keeps only tuples whose normalized item names are equal.
///
/// Normalization lowercases, removes whitespace, and strips the first
/// matching registered suffix, so `UserServiceImpl` and `user service`
/// count as equal while merely similar names are filtered out.
pub struct NameEqualityFilter {
    suffixes: Vec<String>,
}

impl NameEqualityFilter {
    pub fn new(suffixes: &[String]) -> Self {
        Self {
            suffixes: suffixes.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    fn normalize(&self, name: &str) -> String {
        let mut normalized = name.to_lowercase();
        normalized.retain(|c| !c.is_whitespace());
        for suffix in &self.suffixes {
            if normalized.len() > suffix.len() && normalized.ends_with(suffix.as_str()) {
                let keep = normalized.len() - suffix.len();
                normalized.truncate(keep);
                break;
            }
        }
        normalized
    }
}

impl DependentHeuristic for NameEqualityFilter {
    fn name(&self) -> &str {
        "name_equality_filter"
    }

    fn refine(&self, arch: &ArchitectureModel, code: &CodeModel, child: &NodeResult) -> NodeResult {
        let mut result = NodeResult::new();
        for (tuple, score) in child.iter() {
            let (Some(arch_item), Some(code_item)) = (arch.item(tuple.arch), code.item(tuple.code))
            else {
                continue;
            };
            if self.normalize(&arch_item.name) == self.normalize(&code_item.name) {
                result.insert(tuple, score);
            }
        }
        result
    }
}

/// Drops tuples scoring below `min`.
pub struct ConfidenceFloor {
    min: f64,
}

impl ConfidenceFloor {
    pub fn new(min: f64) -> Self {
        Self { min }
    }
}

impl DependentHeuristic for ConfidenceFloor {
    fn name(&self) -> &str {
        "confidence_floor"
    }

    fn refine(
        &self,
        _arch: &ArchitectureModel,
        _code: &CodeModel,
        child: &NodeResult,
    ) -> NodeResult {
        let mut result = NodeResult::new();
        for (tuple, score) in child.iter() {
            if score >= self.min {
                result.insert(tuple, score);
            }
        }
        result
    }
}

/// Multiplies every score by a fixed factor, clamped to [0, 1].
pub struct Reweight {
    factor: f64,
}

impl Reweight {
    pub fn new(factor: f64) -> Self {
        Self { factor }
    }
}

impl DependentHeuristic for Reweight {
    fn name(&self) -> &str {
        "reweight"
    }

    fn refine(
        &self,
        _arch: &ArchitectureModel,
        _code: &CodeModel,
        child: &NodeResult,
    ) -> NodeResult {
        let mut result = NodeResult::new();
        for (tuple, score) in child.iter() {
            result.insert(tuple, (score * self.factor).clamp(0.0, 1.0));
        }
        result
    }
}

/// Keeps, per architecture endpoint, only the best-scoring tuples.
///
/// Ties are all kept; picking one of several equally good candidates is
/// the acceptance threshold's job, not this filter's.
#[derive(Default)]
pub struct BestMatch;

impl BestMatch {
    pub fn new() -> Self {
        Self
    }
}

impl DependentHeuristic for BestMatch {
    fn name(&self) -> &str {
        "best_match"
    }

    fn refine(
        &self,
        _arch: &ArchitectureModel,
        _code: &CodeModel,
        child: &NodeResult,
    ) -> NodeResult {
        let mut best: FxHashMap<ArchIndex, f64> = FxHashMap::default();
        for (tuple, score) in child.iter() {
            best.entry(tuple.arch)
                .and_modify(|current| *current = current.max(score))
                .or_insert(score);
        }

        let mut result = NodeResult::new();
        for (tuple, score) in child.iter() {
            if best
                .get(&tuple.arch)
                .copied()
                .map_or(false, |top| score >= top)
            {
                result.insert(tuple, score);
            }
        }
        result
    }
}
