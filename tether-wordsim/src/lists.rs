//! Similarity over word lists and phrase candidates.

use tracing::debug;

use crate::engine::WordSimEngine;

/// Whether two word lists are similar as wholes.
///
/// The joined phrases are compared first; when that fails, similar pairs
/// across the cross product are counted and the lists are similar once the
/// count reaches `min_proportion` of the longer list. The count exits early
/// in both directions, as soon as the proportion is reached or can no
/// longer be reached.
pub fn are_word_lists_similar(
    engine: &WordSimEngine,
    originals: &[&str],
    tested: &[&str],
    min_proportion: f64,
) -> bool {
    if engine.are_similar(&originals.join(" "), &tested.join(" ")) {
        return true;
    }

    let max = originals.len().max(tested.len()) as f64;
    let possibly_similar = (originals.len() * tested.len()) as f64;
    let mut counter_similar = 0usize;
    let mut counter_dissimilar = 0usize;
    for original in originals {
        for candidate in tested {
            if engine.are_similar(original, candidate) {
                counter_similar += 1;
                if counter_similar as f64 / max >= min_proportion {
                    return true;
                }
            } else {
                counter_dissimilar += 1;
                // the remaining pairs can no longer reach the proportion
                if (possibly_similar - counter_dissimilar as f64) / max < min_proportion {
                    return false;
                }
            }
        }
    }

    counter_similar as f64 / max >= min_proportion
}

/// Pick the candidate phrase most similar to a reference phrase.
///
/// Candidates are admitted by the list test at `initial_threshold`, then
/// whittled down by re-running the test at thresholds raised in `increase`
/// steps until at most one remains or the threshold passes 1.0. A step
/// that would eliminate every remaining candidate is discarded. Terminal
/// ties keep the candidate appearing first; the returned index points into
/// `candidates`.
///
/// # Panics
///
/// Panics when `increase` is not positive, since the elimination loop
/// could not terminate.
pub fn select_most_similar(
    engine: &WordSimEngine,
    reference: &str,
    candidates: &[&str],
    initial_threshold: f64,
    increase: f64,
) -> Option<usize> {
    assert!(
        increase > 0.0,
        "threshold increase must be positive, got {increase}"
    );

    let reference_parts: Vec<&str> = reference.split_whitespace().collect();
    let candidate_parts: Vec<Vec<&str>> = candidates
        .iter()
        .map(|candidate| candidate.split_whitespace().collect())
        .collect();

    let mut remaining: Vec<usize> = (0..candidates.len())
        .filter(|&index| {
            are_word_lists_similar(
                engine,
                &reference_parts,
                &candidate_parts[index],
                initial_threshold,
            )
        })
        .collect();
    if remaining.is_empty() {
        return None;
    }

    let mut threshold = initial_threshold;
    while remaining.len() > 1 && threshold <= 1.0 {
        threshold += increase;
        let survivors: Vec<usize> = remaining
            .iter()
            .copied()
            .filter(|&index| {
                are_word_lists_similar(engine, &reference_parts, &candidate_parts[index], threshold)
            })
            .collect();
        if survivors.is_empty() {
            break;
        }
        remaining = survivors;
    }

    debug!(
        reference,
        survivors = remaining.len(),
        "candidate selection settled"
    );
    remaining.first().copied()
}
