//! Windowed similarity scoring.
//!
//! This is the hot path: O(pages x K x window) similarity evaluations.
//! Each (page, slot) cell only reads from the immutable candidate matrix and
//! writes a disjoint output cell, so page rows are scored in parallel.

use rayon::prelude::*;
use std::ops::Range;

use crate::matrix::CandidateMatrix;

/// Default similarity collaborator: normalized Levenshtein similarity.
///
/// Symmetric, in [0, 1], and 1.0 for identical strings including two empty
/// strings, which is what keeps absent-slot comparisons well defined.
pub fn default_similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

/// Inclusive page window around `page_idx`, clamped to the document edges.
/// Always contains `page_idx` itself.
pub fn page_window(page_idx: usize, page_count: usize, window_size: usize) -> Range<usize> {
    let start = page_idx.saturating_sub(window_size);
    let end = (page_idx + window_size + 1).min(page_count);
    start..end
}

/// Score every slot of a single page row.
///
/// `score(p, s) = sum over q in window(p) of sim(m[p][s], m[q][s]) * weight[s]`,
/// including the self-comparison, which contributes exactly `weight[s]`.
pub fn score_row<F>(
    matrix: &CandidateMatrix,
    page_idx: usize,
    weights: &[f64],
    window_size: usize,
    similarity: &F,
) -> Vec<f64>
where
    F: Fn(&str, &str) -> f64,
{
    let page_count = matrix.page_count();
    matrix.rows[page_idx]
        .iter()
        .enumerate()
        .map(|(slot, text)| {
            let mut score = 0.0;
            for q in page_window(page_idx, page_count, window_size) {
                score += similarity(text, &matrix.rows[q][slot]) * weights[slot];
            }
            score
        })
        .collect()
}

/// Score every (page, slot) cell of a candidate matrix, page rows in
/// parallel.
///
/// `weights` must have length `matrix.slot_count`; pass them reversed for the
/// footer matrix so the highest weight lands on the bottommost line.
pub fn score_matrix<F>(matrix: &CandidateMatrix, weights: &[f64], window_size: usize, similarity: F) -> Vec<Vec<f64>>
where
    F: Fn(&str, &str) -> f64 + Sync,
{
    debug_assert_eq!(weights.len(), matrix.slot_count);

    (0..matrix.page_count())
        .into_par_iter()
        .map(|page_idx| score_row(matrix, page_idx, weights, window_size, &similarity))
        .collect()
}
