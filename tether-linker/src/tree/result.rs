//! Per-node score maps and the evaluation memo.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use tether_core::{ArchIndex, ArchitectureModel, CodeModel, EndpointTuple, TraceLink};

use super::node::NodeId;

/// Scores for the endpoint tuples one node knows about.
///
/// A tuple's absence means the node has no opinion on it, which is distinct
/// from scoring it 0.0; aggregations only fold the children that claim a
/// tuple.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeResult {
    scores: FxHashMap<EndpointTuple, f64>,
}

impl NodeResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_scores(scores: FxHashMap<EndpointTuple, f64>) -> Self {
        Self { scores }
    }

    pub fn insert(&mut self, tuple: EndpointTuple, score: f64) {
        self.scores.insert(tuple, score);
    }

    pub fn get(&self, tuple: EndpointTuple) -> Option<f64> {
        self.scores.get(&tuple).copied()
    }

    pub fn contains(&self, tuple: EndpointTuple) -> bool {
        self.scores.contains_key(&tuple)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Tuples and scores in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (EndpointTuple, f64)> + '_ {
        self.scores.iter().map(|(&tuple, &score)| (tuple, score))
    }

    /// The best-scoring tuple for one architecture endpoint. Ties resolve
    /// to the lowest code index.
    pub fn best_for_arch(&self, arch: ArchIndex) -> Option<(EndpointTuple, f64)> {
        let mut best: Option<(EndpointTuple, f64)> = None;
        for (tuple, score) in self.iter() {
            if tuple.arch != arch {
                continue;
            }
            let better = match best {
                None => true,
                Some((best_tuple, best_score)) => {
                    score > best_score || (score == best_score && tuple.code < best_tuple.code)
                }
            };
            if better {
                best = Some((tuple, score));
            }
        }
        best
    }

    /// The tuples of this result that are not present in `other`.
    pub fn filter(&self, other: &NodeResult) -> NodeResult {
        let scores = self
            .scores
            .iter()
            .filter(|(tuple, _)| !other.contains(**tuple))
            .map(|(&tuple, &score)| (tuple, score))
            .collect();
        Self { scores }
    }

    /// Resolve tuples meeting `threshold` into trace links, sorted by
    /// architecture id then code id. Tuples referencing items missing from
    /// the models are skipped.
    pub fn trace_links(
        &self,
        arch: &ArchitectureModel,
        code: &CodeModel,
        threshold: f64,
    ) -> Vec<TraceLink> {
        let mut links: Vec<TraceLink> = self
            .iter()
            .filter(|&(_, score)| score >= threshold)
            .filter_map(|(tuple, score)| {
                let arch_item = arch.item(tuple.arch)?;
                let code_item = code.item(tuple.code)?;
                Some(TraceLink::new(
                    arch_item.id.clone(),
                    code_item.id.clone(),
                    score,
                ))
            })
            .collect();
        links.sort_by(|a, b| (&a.arch_id, &a.code_id).cmp(&(&b.arch_id, &b.code_id)));
        links
    }
}

/// Memo of node results for one evaluation session.
///
/// Results are shared, not cloned: copying a memoized entry between memos
/// is a reference-count bump.
#[derive(Debug, Clone, Default)]
pub struct ComputationResult {
    results: FxHashMap<NodeId, Arc<NodeResult>>,
}

impl ComputationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.results.contains_key(&id)
    }

    /// The result recorded for `id`, if any.
    pub fn node_result(&self, id: NodeId) -> Option<&NodeResult> {
        self.results.get(&id).map(Arc::as_ref)
    }

    pub(crate) fn shared(&self, id: NodeId) -> Option<Arc<NodeResult>> {
        self.results.get(&id).cloned()
    }

    pub(crate) fn insert_shared(&mut self, id: NodeId, result: Arc<NodeResult>) {
        self.results.insert(id, result);
    }

    /// Record a result for `id`, replacing any previous entry.
    pub fn insert(&mut self, id: NodeId, result: NodeResult) {
        self.results.insert(id, Arc::new(result));
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &NodeResult)> + '_ {
        self.results.iter().map(|(&id, result)| (id, result.as_ref()))
    }
}
