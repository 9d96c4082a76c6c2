//! Endpoint tuples and the trace links derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{ArchIndex, CodeIndex};

/// A candidate pairing of one architecture item and one code item.
///
/// Tuples carry immutable indices, never references into the models, so they
/// are cheap to copy and stable as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EndpointTuple {
    pub arch: ArchIndex,
    pub code: CodeIndex,
}

impl EndpointTuple {
    pub fn new(arch: ArchIndex, code: CodeIndex) -> Self {
        Self { arch, code }
    }
}

/// An accepted link between an architecture item and a code item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceLink {
    /// Identifier of the architecture endpoint.
    pub arch_id: String,
    /// Identifier of the code endpoint.
    pub code_id: String,
    pub confidence: f64,
}

impl TraceLink {
    pub fn new(arch_id: impl Into<String>, code_id: impl Into<String>, confidence: f64) -> Self {
        Self {
            arch_id: arch_id.into(),
            code_id: code_id.into(),
            confidence,
        }
    }
}

impl fmt::Display for TraceLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({:.3})", self.arch_id, self.code_id, self.confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_ordering_is_arch_major() {
        let a = EndpointTuple::new(ArchIndex(0), CodeIndex(5));
        let b = EndpointTuple::new(ArchIndex(1), CodeIndex(0));
        assert!(a < b);
    }

    #[test]
    fn test_display_rounds_confidence() {
        let link = TraceLink::new("c1", "u7", 0.65);
        assert_eq!(link.to_string(), "c1 -> u7 (0.650)");
    }
}
