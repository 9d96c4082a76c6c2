//! Memoized post-order evaluation of a computation tree.

use std::sync::Arc;

use tracing::debug;

use tether_core::{ArchitectureModel, CodeModel};

use super::node::{ComputationTree, NodeId, NodeKind};
use super::result::ComputationResult;

impl ComputationTree {
    /// Evaluate the subtree under `root` with a fresh memo.
    pub fn run(
        &self,
        root: NodeId,
        arch: &ArchitectureModel,
        code: &CodeModel,
    ) -> ComputationResult {
        let mut existing = ComputationResult::new();
        self.evaluate(root, arch, code, &mut existing)
    }

    /// Evaluate the subtree under `root`, reusing and extending `existing`.
    ///
    /// Nodes already present in `existing` are not recomputed; their shared
    /// results are copied into the returned [`ComputationResult`]. Every
    /// node computed along the way is written back into `existing`, so a
    /// memo carried across model revisions keeps amortizing work.
    ///
    /// # Panics
    ///
    /// Panics when `root` is not a node of this tree.
    pub fn evaluate(
        &self,
        root: NodeId,
        arch: &ArchitectureModel,
        code: &CodeModel,
        existing: &mut ComputationResult,
    ) -> ComputationResult {
        let mut local = ComputationResult::new();
        self.evaluate_node(root, arch, code, existing, &mut local);
        local
    }

    fn evaluate_node(
        &self,
        id: NodeId,
        arch: &ArchitectureModel,
        code: &CodeModel,
        existing: &mut ComputationResult,
        local: &mut ComputationResult,
    ) {
        // Children first; a node never computes before all its children.
        for &child in self.children(id) {
            if !local.contains(child) {
                self.evaluate_node(child, arch, code, existing, local);
            }
        }

        if let Some(memoized) = existing.shared(id) {
            local.insert_shared(id, memoized);
            return;
        }

        let result = match &self.node(id).kind {
            NodeKind::Standalone(heuristic) => heuristic.confidences(arch, code),
            NodeKind::Dependent(heuristic) => {
                let child = self.child(id);
                let Some(child_result) = local.node_result(child) else {
                    panic!("child result missing for dependent node {id:?}");
                };
                heuristic.refine(arch, code, child_result)
            }
            NodeKind::Aggregation(aggregation) => {
                let children = self.children(id);
                let mut results = Vec::with_capacity(children.len());
                for &child in children {
                    let Some(child_result) = local.node_result(child) else {
                        panic!("child result missing for aggregation node {id:?}");
                    };
                    results.push(child_result);
                }
                aggregation.combine(&results)
            }
        };

        debug!(node = %self.name(id), tuples = result.len(), "evaluated node");
        let shared = Arc::new(result);
        existing.insert_shared(id, Arc::clone(&shared));
        local.insert_shared(id, shared);
    }
}
