//! Confidence values aggregated from the claims of multiple agents.
//!
//! Every claim is retained with its claimant so the aggregate can be
//! recomputed after late evidence arrives.

pub mod aggregation;
pub mod evidence;

pub use aggregation::AggregationFunction;
pub use evidence::{Claim, Confidence};
