//! Vector math for word embeddings.

/// Cosine similarity between two equal-length vectors.
///
/// Two zero vectors compare to 1.0; a zero vector against anything else
/// compares to 0.0.
///
/// # Panics
///
/// Panics when the vectors have different lengths. Both sides come from the
/// same fixed-dimension store, so a mismatch is a caller bug, not input data.
pub fn cosine_similarity(first: &[f32], second: &[f32]) -> f64 {
    assert_eq!(
        first.len(),
        second.len(),
        "vector length mismatch: {} != {}",
        first.len(),
        second.len()
    );

    if is_zero_vector(first) && is_zero_vector(second) {
        return 1.0;
    }
    if is_zero_vector(first) || is_zero_vector(second) {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut first_norm = 0.0f64;
    let mut second_norm = 0.0f64;
    for (&a, &b) in first.iter().zip(second) {
        let a = f64::from(a);
        let b = f64::from(b);
        dot += a * b;
        first_norm += a * a;
        second_norm += b * b;
    }
    dot / (first_norm.sqrt() * second_norm.sqrt())
}

/// True when the vector has no entries or only zero entries.
pub fn is_zero_vector(vector: &[f32]) -> bool {
    vector.iter().all(|&entry| entry == 0.0)
}
