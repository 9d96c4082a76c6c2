//! Computation trees: heuristics composed into a DAG and evaluated with
//! memoization.

pub mod aggregation;
mod evaluate;
pub mod node;
pub mod result;

pub use aggregation::Aggregation;
pub use node::{ComputationTree, NodeId};
pub use result::{ComputationResult, NodeResult};
