//! Path resemblance between architecture names and code locations.

use std::sync::Arc;

use tether_core::{ArchitectureItem, CodeItem};
use tether_wordsim::WordSimEngine;

use super::StandaloneHeuristic;

/// Scores a pair by how many architecture-name tokens show up in the code
/// item's path.
///
/// A token counts when some path segment contains it verbatim or when the
/// engine accepts the segment and the token as similar. The score is the
/// matched fraction of the tokens; a pair without any match stays
/// unclaimed rather than scoring zero.
pub struct PathResemblance {
    engine: Arc<WordSimEngine>,
}

impl PathResemblance {
    pub fn new(engine: Arc<WordSimEngine>) -> Self {
        Self { engine }
    }
}

impl StandaloneHeuristic for PathResemblance {
    fn name(&self) -> &str {
        "path_resemblance"
    }

    fn assess(&self, arch: &ArchitectureItem, code: &CodeItem) -> Option<f64> {
        let name = arch.name.to_lowercase();
        let tokens: Vec<&str> = name.split_whitespace().collect();
        if tokens.is_empty() {
            return None;
        }

        let path = code.path.to_lowercase();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let hits = tokens
            .iter()
            .filter(|&&token| {
                segments.iter().any(|&segment| {
                    segment.contains(token) || self.engine.are_similar(segment, token)
                })
            })
            .count();
        if hits == 0 {
            return None;
        }
        Some(hits as f64 / tokens.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_core::{ArchitectureItemKind, CodeItemKind};
    use tether_wordsim::{
        measures::{LevenshteinMeasure, SimilarityMeasure},
        strategy::ComparisonStrategy,
    };

    fn engine() -> Arc<WordSimEngine> {
        let engine = WordSimEngine::with_measures(
            vec![SimilarityMeasure::Levenshtein(LevenshteinMeasure::default())],
            ComparisonStrategy::AtLeastOne,
        )
        .unwrap();
        Arc::new(engine)
    }

    fn pair(arch_name: &str, path: &str) -> (ArchitectureItem, CodeItem) {
        (
            ArchitectureItem::new("a0", arch_name, ArchitectureItemKind::Component),
            CodeItem::new("c0", "irrelevant", path, CodeItemKind::Unit),
        )
    }

    #[test]
    fn test_all_tokens_in_path() {
        let heuristic = PathResemblance::new(engine());
        let (arch, code) = pair("user storage", "src/user/storage/store.rs");
        assert_eq!(heuristic.assess(&arch, &code), Some(1.0));
    }

    #[test]
    fn test_partial_token_coverage() {
        let heuristic = PathResemblance::new(engine());
        let (arch, code) = pair("user telemetry", "src/user/mod.rs");
        assert_eq!(heuristic.assess(&arch, &code), Some(0.5));
    }

    #[test]
    fn test_no_coverage_is_no_opinion() {
        let heuristic = PathResemblance::new(engine());
        let (arch, code) = pair("telemetry", "src/billing/invoice.rs");
        assert_eq!(heuristic.assess(&arch, &code), None);
    }

    #[test]
    fn test_typo_in_segment_still_counts() {
        let heuristic = PathResemblance::new(engine());
        let (arch, code) = pair("storage", "src/storrage/mod.rs");
        assert_eq!(heuristic.assess(&arch, &code), Some(1.0));
    }
}
