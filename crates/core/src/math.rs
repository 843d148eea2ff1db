//! Sparse-vector math for term-weight vectors.
//!
//! The scoring engine represents documents as sparse vectors over a learned
//! vocabulary: `(dimension index, weight)` pairs sorted by index. All
//! operations here assume that ordering.

/// Sparse vector: `(dimension index, weight)` pairs sorted by index.
pub type SparseVector = Vec<(usize, f32)>;

/// Dot product of two sparse vectors via a merge walk over the sorted
/// index pairs.
pub fn sparse_dot(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let mut dot = 0.0;
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }

    dot
}

/// Euclidean norm of a sparse vector.
pub fn l2_norm(v: &[(usize, f32)]) -> f32 {
    v.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
}

/// Cosine similarity between two sparse vectors.
///
/// Returns 0.0 when either vector has zero norm, so documents with no terms
/// compare as dissimilar rather than producing NaN.
pub fn cosine_similarity(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let norms = l2_norm(a) * l2_norm(b);
    if norms == 0.0 {
        return 0.0;
    }
    sparse_dot(a, b) / norms
}
