//! Heuristics scoring architecture-code endpoint tuples.
//!
//! Standalone heuristics assess raw model items; dependent heuristics
//! refine a child node's result. Both are object-safe so a tree can mix
//! implementations and tests can instrument invocation counts.

use rayon::prelude::*;

use tether_core::{
    ArchIndex, ArchitectureItem, ArchitectureModel, CodeIndex, CodeItem, CodeModel, EndpointTuple,
};

use crate::tree::NodeResult;

pub mod filters;
pub mod name_resemblance;
pub mod path_resemblance;

pub use filters::{BestMatch, ConfidenceFloor, NameEqualityFilter, Reweight};
pub use name_resemblance::NameResemblance;
pub use path_resemblance::PathResemblance;

/// A heuristic scoring endpoint tuples straight from the models.
pub trait StandaloneHeuristic: Send + Sync {
    fn name(&self) -> &str;

    /// Confidence for one endpoint pair, or `None` when the heuristic has
    /// no opinion; the tuple then stays out of the result entirely.
    fn assess(&self, arch: &ArchitectureItem, code: &CodeItem) -> Option<f64>;

    /// Scores over the full endpoint cross-product, assessing architecture
    /// items in parallel.
    fn confidences(&self, arch: &ArchitectureModel, code: &CodeModel) -> NodeResult {
        let arch_items: Vec<(ArchIndex, &ArchitectureItem)> = arch.iter().collect();
        let code_items: Vec<(CodeIndex, &CodeItem)> = code.iter().collect();
        let scored: Vec<(EndpointTuple, f64)> = arch_items
            .par_iter()
            .flat_map_iter(|&(arch_index, arch_item)| {
                code_items
                    .iter()
                    .filter_map(move |&(code_index, code_item)| {
                        self.assess(arch_item, code_item)
                            .map(|score| (EndpointTuple::new(arch_index, code_index), score))
                    })
            })
            .collect();

        let mut result = NodeResult::new();
        for (tuple, score) in scored {
            result.insert(tuple, score);
        }
        result
    }
}

/// A heuristic deriving a refined result from one child's result.
pub trait DependentHeuristic: Send + Sync {
    fn name(&self) -> &str;

    fn refine(&self, arch: &ArchitectureModel, code: &CodeModel, child: &NodeResult) -> NodeResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_core::{ArchitectureItemKind, CodeItemKind};

    struct DiagonalHeuristic;

    impl StandaloneHeuristic for DiagonalHeuristic {
        fn name(&self) -> &str {
            "diagonal"
        }

        fn assess(&self, arch: &ArchitectureItem, code: &CodeItem) -> Option<f64> {
            (arch.name == code.name).then_some(1.0)
        }
    }

    fn two_by_two() -> (ArchitectureModel, CodeModel) {
        let mut arch = ArchitectureModel::new("arch");
        arch.push(ArchitectureItem::new(
            "a0",
            "logic",
            ArchitectureItemKind::Component,
        ));
        arch.push(ArchitectureItem::new(
            "a1",
            "storage",
            ArchitectureItemKind::Component,
        ));
        let mut code = CodeModel::new("code");
        code.push(CodeItem::new(
            "c0",
            "logic",
            "src/logic.rs",
            CodeItemKind::Unit,
        ));
        code.push(CodeItem::new(
            "c1",
            "storage",
            "src/storage.rs",
            CodeItemKind::Unit,
        ));
        (arch, code)
    }

    #[test]
    fn test_confidences_keeps_only_assessed_tuples() {
        let (arch, code) = two_by_two();
        let result = DiagonalHeuristic.confidences(&arch, &code);
        assert_eq!(result.len(), 2);
        assert_eq!(
            result.get(EndpointTuple::new(ArchIndex(0), CodeIndex(0))),
            Some(1.0)
        );
        assert_eq!(
            result.get(EndpointTuple::new(ArchIndex(0), CodeIndex(1))),
            None
        );
    }

    #[test]
    fn test_confidences_over_empty_models() {
        let arch = ArchitectureModel::new("arch");
        let code = CodeModel::new("code");
        let result = DiagonalHeuristic.confidences(&arch, &code);
        assert!(result.is_empty());
    }
}
