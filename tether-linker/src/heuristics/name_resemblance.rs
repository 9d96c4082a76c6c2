//! Name resemblance between architecture items and code items.

use std::sync::Arc;

use tether_core::{ArchitectureItem, CodeItem};
use tether_wordsim::WordSimEngine;

use super::StandaloneHeuristic;

/// Scores endpoint pairs by comparing the architecture item name against
/// the code item's name variants.
///
/// Variants are the lowercased name, the path stem when it differs, and
/// each of those with a registered suffix such as `impl` stripped. Only
/// variants the engine accepts as similar contribute; the score is the
/// highest engine similarity among them.
pub struct NameResemblance {
    engine: Arc<WordSimEngine>,
    suffixes: Vec<String>,
}

impl NameResemblance {
    pub fn new(engine: Arc<WordSimEngine>, suffixes: &[String]) -> Self {
        Self {
            engine,
            suffixes: suffixes.iter().map(|s| s.to_lowercase()).collect(),
        }
    }

    fn variants(&self, code: &CodeItem) -> Vec<String> {
        let mut variants = vec![code.name.to_lowercase()];
        let stem = code.path_stem().to_lowercase();
        if !stem.is_empty() && !variants.contains(&stem) {
            variants.push(stem);
        }
        // Suffix stripping applies to the raw variants, not recursively.
        for position in 0..variants.len() {
            for suffix in &self.suffixes {
                let Some(base) = variants[position].strip_suffix(suffix.as_str()) else {
                    continue;
                };
                let base = base.to_string();
                if !base.is_empty() && !variants.contains(&base) {
                    variants.push(base);
                }
            }
        }
        variants
    }
}

impl StandaloneHeuristic for NameResemblance {
    fn name(&self) -> &str {
        "name_resemblance"
    }

    fn assess(&self, arch: &ArchitectureItem, code: &CodeItem) -> Option<f64> {
        let arch_name = arch.name.to_lowercase();
        let mut best: Option<f64> = None;
        for variant in self.variants(code) {
            if !self.engine.are_similar(&arch_name, &variant) {
                continue;
            }
            let score = self.engine.similarity(&arch_name, &variant);
            if best.map_or(true, |current| score > current) {
                best = Some(score);
            }
        }
        best
    }
}
