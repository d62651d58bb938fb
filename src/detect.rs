//! Detection pipeline orchestration.
//!
//! Data flows strictly forward: tag candidates, build the two candidate
//! matrices, score them against a page window, classify. Each stage produces
//! new values; nothing downstream mutates an earlier stage's state.

use indicatif::{ProgressBar, ProgressStyle};

use crate::classify::classify;
use crate::matrix::{build_footer_matrix, build_header_matrix, CandidateMatrix};
use crate::models::{DetectorParams, LineRecord, LineType};
use crate::score::{default_similarity, score_row};
use crate::tagger::tag_candidates;

/// Header/footer detector for multi-page documents.
///
/// Lines that recur in the same relative position across a window of pages
/// (titles, page numbers, copyright notices) score high and are classified
/// as headers or footers; everything else is body text.
///
/// # Example
///
/// ```
/// use headfoot::prelude::*;
///
/// let params = DetectorParams {
///     window_size: 2,
///     header_threshold: 2.0,
///     footer_threshold: 2.0,
///     weights: vec![1.0],
/// };
/// let detector = Detector::new(params);
///
/// let doc: Vec<Vec<String>> = (0..4)
///     .map(|i| {
///         vec![
///             "Page Header".to_string(),
///             format!("Content of page {i}"),
///             format!("Page {i}"),
///         ]
///     })
///     .collect();
///
/// let body = detector.strip(&doc);
/// assert_eq!(body[0], vec!["Content of page 0".to_string()]);
/// ```
#[derive(Debug, Clone)]
pub struct Detector {
    params: DetectorParams,
}

impl Detector {
    pub fn new(params: DetectorParams) -> Self {
        Detector { params }
    }

    pub fn params(&self) -> &DetectorParams {
        &self.params
    }

    /// Annotate every line of a document with candidate flags, scores, and a
    /// final classification.
    ///
    /// Empty pages are dropped; the output has one entry per retained page,
    /// in order, with lines in their original order. Uses normalized
    /// Levenshtein similarity for cross-page comparison.
    pub fn annotate(&self, doc: &[Vec<String>]) -> Vec<Vec<LineRecord>> {
        self.annotate_with(doc, default_similarity, false)
    }

    /// Like [`annotate`](Self::annotate) with an optional progress bar over
    /// the scoring passes.
    pub fn annotate_with_progress(
        &self,
        doc: &[Vec<String>],
        show_progress: bool,
    ) -> Vec<Vec<LineRecord>> {
        self.annotate_with(doc, default_similarity, show_progress)
    }

    /// Annotate using a caller-supplied similarity collaborator.
    ///
    /// The collaborator must be symmetric, return values in [0, 1], and
    /// return 1.0 for identical inputs including two empty strings.
    pub fn annotate_with<F>(
        &self,
        doc: &[Vec<String>],
        similarity: F,
        show_progress: bool,
    ) -> Vec<Vec<LineRecord>>
    where
        F: Fn(&str, &str) -> f64 + Sync,
    {
        let slot_count = self.params.slot_count();

        let pages = tag_candidates(doc, slot_count);
        if pages.is_empty() {
            return pages;
        }

        let header_matrix = build_header_matrix(&pages, slot_count);
        let footer_matrix = build_footer_matrix(&pages, slot_count);

        let progress = if show_progress {
            let pb = ProgressBar::new((pages.len() * 2) as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template(
                        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} pages",
                    )
                    .unwrap()
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let header_scores = scored_rows(
            &header_matrix,
            &self.params.weights,
            self.params.window_size,
            &similarity,
            progress.as_ref(),
        );

        // Footer weights are reversed so the highest weight aligns with the
        // line closest to the bottom edge (slot K-1)
        let reversed_weights: Vec<f64> = self.params.weights.iter().rev().copied().collect();
        let footer_scores = scored_rows(
            &footer_matrix,
            &reversed_weights,
            self.params.window_size,
            &similarity,
            progress.as_ref(),
        );

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        classify(pages, &header_scores, &footer_scores, &self.params)
    }

    /// Return only body text per page, preserving intra-page order.
    ///
    /// Convenience over [`annotate`](Self::annotate) that strips every line
    /// classified as a header or footer.
    pub fn strip(&self, doc: &[Vec<String>]) -> Vec<Vec<String>> {
        strip_classified(&self.annotate(doc))
    }
}

/// Score page rows in parallel, ticking the progress bar per row.
fn scored_rows<F>(
    matrix: &CandidateMatrix,
    weights: &[f64],
    window_size: usize,
    similarity: &F,
    progress: Option<&ProgressBar>,
) -> Vec<Vec<f64>>
where
    F: Fn(&str, &str) -> f64 + Sync,
{
    use rayon::prelude::*;

    (0..matrix.page_count())
        .into_par_iter()
        .map(|page_idx| {
            let row = score_row(matrix, page_idx, weights, window_size, similarity);
            if let Some(pb) = progress {
                pb.inc(1);
            }
            row
        })
        .collect()
}

/// Filter an already-annotated document down to body text per page.
pub fn strip_classified(pages: &[Vec<LineRecord>]) -> Vec<Vec<String>> {
    pages
        .iter()
        .map(|page| {
            page.iter()
                .filter(|line| line.line_type == LineType::Body)
                .map(|line| line.text.clone())
                .collect()
        })
        .collect()
}
