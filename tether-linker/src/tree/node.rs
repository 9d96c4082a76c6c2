//! The computation tree arena.

use std::sync::Arc;

use smallvec::SmallVec;

use crate::heuristics::{DependentHeuristic, StandaloneHeuristic};

use super::aggregation::Aggregation;

/// Handle to a node in a [`ComputationTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

pub(crate) enum NodeKind {
    Standalone(Arc<dyn StandaloneHeuristic>),
    Dependent(Arc<dyn DependentHeuristic>),
    Aggregation(Aggregation),
}

pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) children: SmallVec<[NodeId; 2]>,
}

/// Append-only arena of computation nodes.
///
/// Children must exist before their parent is added, so child ids are
/// always smaller than their parent's and the graph is acyclic by
/// construction; no cycle detection happens at evaluation time. A node may
/// be referenced by several parents and is then shared, not duplicated.
#[derive(Default)]
pub struct ComputationTree {
    nodes: Vec<Node>,
}

impl ComputationTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a standalone heuristic leaf.
    pub fn standalone(&mut self, heuristic: Arc<dyn StandaloneHeuristic>) -> NodeId {
        self.push(Node {
            kind: NodeKind::Standalone(heuristic),
            children: SmallVec::new(),
        })
    }

    /// Add a dependent heuristic over one child.
    ///
    /// # Panics
    ///
    /// Panics when `child` is not a node of this tree.
    pub fn dependent(&mut self, heuristic: Arc<dyn DependentHeuristic>, child: NodeId) -> NodeId {
        self.check_member(child);
        let mut children = SmallVec::new();
        children.push(child);
        self.push(Node {
            kind: NodeKind::Dependent(heuristic),
            children,
        })
    }

    /// Add an aggregation over `children`.
    ///
    /// # Panics
    ///
    /// Panics on zero children, on a child that is not a node of this
    /// tree, or when an `Average` weight list does not match the child
    /// count.
    pub fn aggregation(&mut self, aggregation: Aggregation, children: &[NodeId]) -> NodeId {
        assert!(
            !children.is_empty(),
            "aggregation node needs at least one child"
        );
        for &child in children {
            self.check_member(child);
        }
        if let Aggregation::Average {
            weights: Some(weights),
        } = &aggregation
        {
            assert_eq!(
                weights.len(),
                children.len(),
                "average weights must match the child count"
            );
        }
        self.push(Node {
            kind: NodeKind::Aggregation(aggregation),
            children: SmallVec::from_slice(children),
        })
    }

    /// The single child of `id`.
    ///
    /// # Panics
    ///
    /// Panics when `id` does not have exactly one child.
    pub fn child(&self, id: NodeId) -> NodeId {
        let children = self.children(id);
        assert_eq!(
            children.len(),
            1,
            "node {id:?} does not have exactly one child"
        );
        children[0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Node name for logs and evidence claimant ids.
    pub fn name(&self, id: NodeId) -> String {
        match &self.node(id).kind {
            NodeKind::Standalone(heuristic) => heuristic.name().to_string(),
            NodeKind::Dependent(heuristic) => heuristic.name().to_string(),
            NodeKind::Aggregation(aggregation) => aggregation.name().to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    fn check_member(&self, id: NodeId) {
        assert!(
            id.index() < self.nodes.len(),
            "node {id:?} is not part of this tree"
        );
    }
}

impl std::fmt::Debug for ComputationTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputationTree")
            .field("nodes", &self.nodes.len())
            .finish_non_exhaustive()
    }
}
