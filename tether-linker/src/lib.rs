//! # tether-linker
//!
//! Trace link generation between architecture and code models. Heuristics
//! are composed into a [`ComputationTree`] whose nodes score endpoint
//! tuples; evaluation memoizes per-node results so shared subtrees and
//! repeated runs over the same models cost nothing extra. The root
//! result feeds a [`LinkCollector`] that aggregates evidence into
//! [`tether_core::TraceLink`]s.

pub mod generator;
pub mod heuristics;
pub mod tree;

pub use generator::{to_json, LinkCollector, TraceLinkGenerator};
pub use tree::{Aggregation, ComputationResult, ComputationTree, NodeId, NodeResult};
