//! N-gram distance measure after Kondrak 2005.

use crate::context::ComparisonContext;

/// Pad character for the Lucene variant. Never occurs in real terms.
const LUCENE_PREFIX: char = '\n';

/// Variants of the n-gram distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NgramVariant {
    /// Matches the algorithm shipped in apache/lucene: pads with a marker
    /// character and shrinks the per-window weight for matched pad positions.
    Lucene,
    /// The positional variant as described in Kondrak 2005, padding with the
    /// word's own first character.
    Positional,
}

/// Word similarity via positional n-gram distance.
#[derive(Debug, Clone)]
pub struct NgramMeasure {
    variant: NgramVariant,
    n: usize,
    threshold: f64,
}

impl NgramMeasure {
    /// `n` must be at least 1.
    pub fn new(variant: NgramVariant, n: usize, threshold: f64) -> Self {
        assert!(n >= 1, "n-gram size must be at least 1, got {n}");
        Self {
            variant,
            n,
            threshold,
        }
    }

    pub fn is_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        self.score(ctx) >= self.threshold
    }

    pub fn score(&self, ctx: &ComparisonContext<'_>) -> f64 {
        let first = ctx.first_term().to_lowercase();
        let second = ctx.second_term().to_lowercase();
        let max_len = first.chars().count().max(second.chars().count());
        if max_len == 0 {
            return 1.0;
        }
        1.0 - self.distance(&first, &second) / max_len as f64
    }

    /// N-gram distance between two raw strings.
    pub fn distance(&self, x: &str, y: &str) -> f64 {
        let k = x.chars().count();
        let l = y.chars().count();
        if k == 0 || l == 0 {
            return k.max(l) as f64;
        }

        let xp = self.pad(x, k);
        let yp = self.pad(y, l);

        // d[i][j] over the unpadded lengths; windows read the padded chars.
        let mut d = vec![vec![0.0f64; l + 1]; k + 1];
        for (i, row) in d.iter_mut().enumerate() {
            row[0] = i as f64;
        }
        for j in 1..=l {
            d[0][j] = j as f64;
        }
        for i in 1..=k {
            for j in 1..=l {
                let window = self.window_cost(&xp, &yp, i - 1, j - 1);
                d[i][j] = (d[i - 1][j] + 1.0)
                    .min(d[i][j - 1] + 1.0)
                    .min(d[i - 1][j - 1] + window);
            }
        }
        d[k][l]
    }

    /// Prepends `n - 1` pad characters.
    fn pad(&self, term: &str, len: usize) -> Vec<char> {
        let mut padded = Vec::with_capacity(len + self.n - 1);
        match self.variant {
            NgramVariant::Lucene => {
                padded.resize(self.n - 1, LUCENE_PREFIX);
            }
            NgramVariant::Positional => {
                // len > 0 is guaranteed by the caller
                if let Some(first) = term.chars().next() {
                    padded.resize(self.n - 1, first);
                }
            }
        }
        padded.extend(term.chars());
        padded
    }

    /// Mean mismatch count over one n-wide window. Matched pad positions in
    /// the Lucene variant shrink the effective window instead of counting as
    /// free matches.
    fn window_cost(&self, x: &[char], y: &[char], i: usize, j: usize) -> f64 {
        let mut sum = 0.0;
        let mut effective_n = self.n as f64;
        for u in 0..self.n {
            let xc = x[i + u];
            if xc == y[j + u] {
                if self.variant == NgramVariant::Lucene && xc == LUCENE_PREFIX {
                    effective_n -= 1.0;
                }
            } else {
                sum += 1.0;
            }
        }
        sum / effective_n
    }
}

impl Default for NgramMeasure {
    fn default() -> Self {
        Self::new(NgramVariant::Lucene, 2, 0.75)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_terms_have_zero_distance() {
        let measure = NgramMeasure::default();
        assert_eq!(measure.distance("ab", "ab"), 0.0);
        assert_eq!(measure.score(&ComparisonContext::of("ab", "ab")), 1.0);
    }

    #[test]
    fn test_empty_side_costs_full_length() {
        let measure = NgramMeasure::default();
        assert_eq!(measure.distance("", "word"), 4.0);
        assert_eq!(measure.score(&ComparisonContext::of("", "word")), 0.0);
        assert_eq!(measure.score(&ComparisonContext::of("", "")), 1.0);
    }

    #[test]
    fn test_lucene_distance_hand_computed() {
        // "ab" vs "b": d(1,1) = 1 via the padded window, d(2,1) picks the
        // diagonal 1 + 0.5 mixed window
        let measure = NgramMeasure::new(NgramVariant::Lucene, 2, 0.75);
        assert!((measure.distance("ab", "b") - 1.5).abs() < 1e-12);
        let score = measure.score(&ComparisonContext::of("ab", "b"));
        assert!((score - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_distance_is_symmetric() {
        for variant in [NgramVariant::Lucene, NgramVariant::Positional] {
            let measure = NgramMeasure::new(variant, 2, 0.75);
            let forward = measure.distance("monday", "montag");
            let backward = measure.distance("montag", "monday");
            assert_eq!(forward, backward);
        }
    }

    #[test]
    fn test_close_terms_beat_distant_terms() {
        let measure = NgramMeasure::default();
        let close = measure.score(&ComparisonContext::of("storage", "storrage"));
        let distant = measure.score(&ComparisonContext::of("storage", "network"));
        assert!(close > distant);
        assert!(measure.is_similar(&ComparisonContext::of("storage", "storrage")));
        assert!(!measure.is_similar(&ComparisonContext::of("storage", "network")));
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        let measure = NgramMeasure::default();
        assert_eq!(measure.score(&ComparisonContext::of("Word", "word")), 1.0);
    }

    #[test]
    #[should_panic(expected = "n-gram size must be at least 1")]
    fn test_zero_n_panics() {
        let _ = NgramMeasure::new(NgramVariant::Lucene, 0, 0.75);
    }
}
