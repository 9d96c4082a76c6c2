//! Edit distance measure with a length-scaled acceptance gate.

use crate::context::ComparisonContext;

/// Levenshtein edit distance over Unicode scalar values.
///
/// Short terms carry little signal per character, so pairs whose shorter
/// side is below `min_length` only pass on an exact match. Longer pairs
/// accept up to `threshold` edits per character of the shorter side, capped
/// by `max_distance`.
#[derive(Debug, Clone)]
pub struct LevenshteinMeasure {
    min_length: usize,
    max_distance: usize,
    threshold: f64,
}

impl LevenshteinMeasure {
    pub fn new(min_length: usize, max_distance: usize, threshold: f64) -> Self {
        Self {
            min_length,
            max_distance,
            threshold,
        }
    }

    pub fn is_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        let first = ctx.first_term().to_lowercase();
        let second = ctx.second_term().to_lowercase();
        let first_len = first.chars().count();
        let second_len = second.chars().count();
        let min_len = first_len.min(second_len);
        let d = distance(&first, &second);

        if min_len < self.min_length {
            return d == 0;
        }
        let dynamic_cutoff = (self.threshold * min_len as f64).floor() as usize;
        d <= self.max_distance.min(dynamic_cutoff)
    }

    pub fn score(&self, ctx: &ComparisonContext<'_>) -> f64 {
        let first = ctx.first_term().to_lowercase();
        let second = ctx.second_term().to_lowercase();
        let max_len = first.chars().count().max(second.chars().count());
        if max_len == 0 {
            return 1.0;
        }
        1.0 - distance(&first, &second) as f64 / max_len as f64
    }
}

impl Default for LevenshteinMeasure {
    fn default() -> Self {
        Self::new(3, 4, 1.0 / 3.0)
    }
}

/// Classic two-row dynamic programming edit distance.
pub fn distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}
