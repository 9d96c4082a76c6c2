//! Jaro-Winkler similarity over Unicode scalar values.

use crate::context::ComparisonContext;

const BOOST_THRESHOLD: f64 = 0.7;
const PREFIX_SCALE: f64 = 0.1;
const MAX_PREFIX: usize = 4;

/// Jaro similarity with the Winkler boost for matching prefixes.
#[derive(Debug, Clone)]
pub struct JaroWinklerMeasure {
    threshold: f64,
}

impl JaroWinklerMeasure {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn is_similar(&self, ctx: &ComparisonContext<'_>) -> bool {
        self.score(ctx) >= self.threshold
    }

    pub fn score(&self, ctx: &ComparisonContext<'_>) -> f64 {
        similarity(ctx.first_term(), ctx.second_term())
    }
}

impl Default for JaroWinklerMeasure {
    fn default() -> Self {
        Self::new(0.9)
    }
}

/// Jaro-Winkler similarity of two strings, in [0, 1].
pub fn similarity(first: &str, second: &str) -> f64 {
    if first == second {
        return 1.0;
    }
    let left: Vec<char> = first.chars().collect();
    let right: Vec<char> = second.chars().collect();

    let (m, half_transpositions, prefix) = matches(&left, &right);
    if m == 0 {
        return 0.0;
    }
    let m = m as f64;
    let jaro = (m / left.len() as f64
        + m / right.len() as f64
        + (m - half_transpositions as f64 / 2.0) / m)
        / 3.0;
    if jaro < BOOST_THRESHOLD {
        jaro
    } else {
        jaro + PREFIX_SCALE * prefix as f64 * (1.0 - jaro)
    }
}

/// Returns (matches, half transpositions, common prefix length).
fn matches(first: &[char], second: &[char]) -> (usize, usize, usize) {
    let (min, max) = if first.len() > second.len() {
        (second, first)
    } else {
        (first, second)
    };
    let range = (max.len() / 2).saturating_sub(1);

    let mut match_indexes = vec![usize::MAX; min.len()];
    let mut match_flags = vec![false; max.len()];
    let mut match_count = 0usize;
    for (mi, &c) in min.iter().enumerate() {
        let lo = mi.saturating_sub(range);
        let hi = (mi + range + 1).min(max.len());
        for (xi, flag) in match_flags.iter_mut().enumerate().take(hi).skip(lo) {
            if !*flag && c == max[xi] {
                match_indexes[mi] = xi;
                *flag = true;
                match_count += 1;
                break;
            }
        }
    }

    let ms1: Vec<char> = min
        .iter()
        .zip(&match_indexes)
        .filter(|&(_, &idx)| idx != usize::MAX)
        .map(|(&c, _)| c)
        .collect();
    let ms2: Vec<char> = max
        .iter()
        .zip(&match_flags)
        .filter(|&(_, &flagged)| flagged)
        .map(|(&c, _)| c)
        .collect();

    let half_transpositions = ms1.iter().zip(&ms2).filter(|&(a, b)| a != b).count();

    let mut prefix = 0usize;
    for i in 0..MAX_PREFIX.min(min.len()) {
        if first[i] != second[i] {
            break;
        }
        prefix += 1;
    }

    (match_count, half_transpositions, prefix)
}
