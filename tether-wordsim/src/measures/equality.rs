//! Trivial byte-equality measure.

use crate::context::ComparisonContext;

/// Considers two terms similar only when they are identical.
///
/// Comparison is case-sensitive byte equality; callers wanting
/// case-insensitive behavior lowercase before building the context.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualityMeasure;

impl EqualityMeasure {
    pub fn is_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        ctx.first_term() == ctx.second_term()
    }

    pub fn score(&self, ctx: &ComparisonContext<'_>) -> f64 {
        if self.is_similar(ctx) {
            1.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_terms_are_similar() {
        let ctx = ComparisonContext::of("storage", "storage");
        assert!(EqualityMeasure.is_similar(&ctx));
        assert_eq!(EqualityMeasure.score(&ctx), 1.0);
    }

    #[test]
    fn test_case_matters() {
        let ctx = ComparisonContext::of("Storage", "storage");
        assert!(!EqualityMeasure.is_similar(&ctx));
        assert_eq!(EqualityMeasure.score(&ctx), 0.0);
    }
}
