//! Trace link generation over a computation tree.

use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::info;

use tether_core::{
    AggregationFunction, ArchitectureModel, CodeModel, Confidence, EndpointTuple, LinkError,
    LinkerConfig, TraceLink,
};
use tether_wordsim::WordSimEngine;

use crate::heuristics::{BestMatch, ConfidenceFloor, NameResemblance, PathResemblance};
use crate::tree::{Aggregation, ComputationResult, ComputationTree, NodeId};

/// Evidence accumulator keyed by endpoint tuple.
///
/// Every claimant contributes one claim per tuple; the configured
/// aggregation function folds the claims into the tuple's confidence.
/// External agents may add evidence alongside the tree's root before
/// finalizing.
#[derive(Debug)]
pub struct LinkCollector {
    aggregator: AggregationFunction,
    evidence: FxHashMap<EndpointTuple, Confidence>,
}

impl LinkCollector {
    pub fn new(aggregator: AggregationFunction) -> Self {
        Self {
            aggregator,
            evidence: FxHashMap::default(),
        }
    }

    pub fn add_evidence(&mut self, tuple: EndpointTuple, claimant: &str, score: f64) {
        let aggregator = self.aggregator;
        self.evidence
            .entry(tuple)
            .or_insert_with(|| Confidence::new(aggregator))
            .add_evidence(claimant, score);
    }

    /// Aggregated confidence of one tuple, `None` without evidence.
    pub fn confidence(&self, tuple: EndpointTuple) -> Option<f64> {
        self.evidence.get(&tuple).map(Confidence::confidence)
    }

    pub fn len(&self) -> usize {
        self.evidence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.evidence.is_empty()
    }

    /// Resolves indices against the models and emits the accepted links,
    /// sorted by (arch id, code id).
    ///
    /// A tuple pointing outside the models means the collector was fed
    /// from different model revisions and is reported as
    /// [`LinkError::ModelMismatch`].
    pub fn finalize(
        &self,
        arch: &ArchitectureModel,
        code: &CodeModel,
        threshold: f64,
    ) -> Result<Vec<TraceLink>, LinkError> {
        let mut links = Vec::new();
        for (&tuple, confidence) in &self.evidence {
            let score = confidence.confidence();
            if score < threshold {
                continue;
            }
            let arch_item = arch.item(tuple.arch).ok_or_else(|| {
                LinkError::ModelMismatch(format!("unknown architecture index {:?}", tuple.arch))
            })?;
            let code_item = code.item(tuple.code).ok_or_else(|| {
                LinkError::ModelMismatch(format!("unknown code index {:?}", tuple.code))
            })?;
            links.push(TraceLink::new(
                arch_item.id.clone(),
                code_item.id.clone(),
                score,
            ));
        }
        links.sort_by(|a, b| (&a.arch_id, &a.code_id).cmp(&(&b.arch_id, &b.code_id)));
        Ok(links)
    }
}

/// Generates trace links by evaluating a computation tree and collecting
/// the root's scores as evidence.
#[derive(Debug)]
pub struct TraceLinkGenerator {
    tree: ComputationTree,
    root: NodeId,
    config: LinkerConfig,
}

impl TraceLinkGenerator {
    /// Generator over a caller-built tree. `root` is the node whose result
    /// becomes evidence.
    pub fn new(tree: ComputationTree, root: NodeId, config: LinkerConfig) -> Self {
        Self { tree, root, config }
    }

    /// Generator over the default tree: name and path resemblance, each
    /// floored, averaged, then reduced to the best match per architecture
    /// endpoint.
    pub fn with_default_tree(engine: Arc<WordSimEngine>, config: LinkerConfig) -> Self {
        let suffixes = config.effective_name_suffixes();
        let floor = config.effective_confidence_floor();

        let mut tree = ComputationTree::new();
        let name = tree.standalone(Arc::new(NameResemblance::new(
            Arc::clone(&engine),
            &suffixes,
        )));
        let path = tree.standalone(Arc::new(PathResemblance::new(engine)));
        let name_floor = tree.dependent(Arc::new(ConfidenceFloor::new(floor)), name);
        let path_floor = tree.dependent(Arc::new(ConfidenceFloor::new(floor)), path);
        let average = tree.aggregation(
            Aggregation::Average { weights: None },
            &[name_floor, path_floor],
        );
        let root = tree.dependent(Arc::new(BestMatch::new()), average);
        Self::new(tree, root, config)
    }

    pub fn tree(&self) -> &ComputationTree {
        &self.tree
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Generates links with a fresh memo.
    pub fn generate(
        &self,
        arch: &ArchitectureModel,
        code: &CodeModel,
    ) -> Result<Vec<TraceLink>, LinkError> {
        let mut memo = ComputationResult::new();
        self.generate_seeded(arch, code, &mut memo)
    }

    /// Generates links, reusing and extending `memo` across calls.
    pub fn generate_seeded(
        &self,
        arch: &ArchitectureModel,
        code: &CodeModel,
        memo: &mut ComputationResult,
    ) -> Result<Vec<TraceLink>, LinkError> {
        let result = self.tree.evaluate(self.root, arch, code, memo);
        let mut collector = LinkCollector::new(self.config.effective_aggregator());
        self.collect_evidence(&result, &mut collector);
        let links = collector.finalize(arch, code, self.config.effective_accept_threshold())?;
        info!(
            arch_items = arch.len(),
            code_items = code.len(),
            links = links.len(),
            "trace link generation finished"
        );
        Ok(links)
    }

    /// Feeds the root node's scores into `collector`, claimant = root node
    /// name.
    pub fn collect_evidence(&self, result: &ComputationResult, collector: &mut LinkCollector) {
        let claimant = self.tree.name(self.root);
        if let Some(root_result) = result.node_result(self.root) {
            for (tuple, score) in root_result.iter() {
                collector.add_evidence(tuple, &claimant, score);
            }
        }
    }
}

/// Serializes links as pretty-printed JSON.
pub fn to_json(links: &[TraceLink]) -> Result<String, LinkError> {
    serde_json::to_string_pretty(links).map_err(LinkError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tether_core::{ArchIndex, CodeIndex};

    fn tuple(arch: u32, code: u32) -> EndpointTuple {
        EndpointTuple::new(ArchIndex(arch), CodeIndex(code))
    }

    #[test]
    fn test_single_claim_passes_through() {
        let mut collector = LinkCollector::new(AggregationFunction::Mean);
        collector.add_evidence(tuple(0, 0), "name_resemblance", 0.75);
        assert_eq!(collector.confidence(tuple(0, 0)), Some(0.75));
        assert_eq!(collector.confidence(tuple(0, 1)), None);
    }

    #[test]
    fn test_claims_aggregate_per_tuple() {
        let mut collector = LinkCollector::new(AggregationFunction::Mean);
        collector.add_evidence(tuple(0, 0), "name_resemblance", 0.8);
        collector.add_evidence(tuple(0, 0), "reviewer", 0.4);

        let confidence = collector.confidence(tuple(0, 0));
        assert!(confidence.map_or(false, |c| (c - 0.6).abs() < 1e-12));
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_finalize_rejects_foreign_tuples() {
        let arch = ArchitectureModel::new("arch");
        let code = CodeModel::new("code");
        let mut collector = LinkCollector::new(AggregationFunction::Max);
        collector.add_evidence(tuple(3, 3), "stray", 0.9);

        let error = collector.finalize(&arch, &code, 0.0).unwrap_err();
        assert!(matches!(error, LinkError::ModelMismatch(_)));
    }
}
