//! Threshold classification of scored candidate lines.
//!
//! Header classification runs first and is never revoked. A footer candidate
//! is only classified as a footer when its footer score meets the threshold
//! AND strictly exceeds that line's header score, which resolves lines that
//! qualify for both roles on short pages.

use crate::models::{DetectorParams, LineRecord, LineType};

/// Apply scores and classify lines, consuming the tagged pages.
///
/// `header_scores` and `footer_scores` are the pages x K score matrices from
/// the window scorer; footer scores are indexed bottom-up (slot K-1 is the
/// last candidate line on the page). Lines that are not candidates keep their
/// default `body` type and zero scores.
pub fn classify(
    mut pages: Vec<Vec<LineRecord>>,
    header_scores: &[Vec<f64>],
    footer_scores: &[Vec<f64>],
    params: &DetectorParams,
) -> Vec<Vec<LineRecord>> {
    let slot_count = params.slot_count();

    for (page_idx, page) in pages.iter_mut().enumerate() {
        apply_header_scores(page, &header_scores[page_idx], params);
        apply_footer_scores(page, &footer_scores[page_idx], slot_count, params);
    }

    pages
}

/// Walk header candidates top-down, assigning slot scores in order.
fn apply_header_scores(page: &mut [LineRecord], scores: &[f64], params: &DetectorParams) {
    let mut slot = 0;
    for line in page.iter_mut() {
        if line.is_header_candidate {
            let score = scores[slot];
            line.header_score = score;
            if score >= params.header_threshold {
                line.line_type = LineType::Header;
            }
            slot += 1;
        }
    }
}

/// Walk footer candidates bottom-up; the last candidate on the page takes
/// slot K-1.
fn apply_footer_scores(
    page: &mut [LineRecord],
    scores: &[f64],
    slot_count: usize,
    params: &DetectorParams,
) {
    let mut filled = 0;
    for line in page.iter_mut().rev() {
        if line.is_footer_candidate {
            let score = scores[slot_count - 1 - filled];
            line.footer_score = score;
            if score >= params.footer_threshold && score > line.header_score {
                line.line_type = LineType::Footer;
            }
            filled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag_candidates;

    fn params(header_threshold: f64, footer_threshold: f64, weights: Vec<f64>) -> DetectorParams {
        DetectorParams {
            window_size: 2,
            header_threshold,
            footer_threshold,
            weights,
        }
    }

    fn one_page(lines: &[&str], slot_count: usize) -> Vec<Vec<LineRecord>> {
        let doc = vec![lines.iter().map(|s| s.to_string()).collect()];
        tag_candidates(&doc, slot_count)
    }

    #[test]
    fn test_header_above_threshold() {
        let pages = one_page(&["Head", "Body", "Foot"], 1);
        let classified = classify(
            pages,
            &[vec![3.0]],
            &[vec![1.0]],
            &params(2.0, 2.0, vec![1.0]),
        );

        assert_eq!(classified[0][0].line_type, LineType::Header);
        assert_eq!(classified[0][0].header_score, 3.0);
        assert_eq!(classified[0][1].line_type, LineType::Body);
        assert_eq!(classified[0][2].line_type, LineType::Body);
    }

    #[test]
    fn test_footer_requires_beating_header_score() {
        // Single line is both candidate roles; equal scores keep it a header
        let pages = one_page(&["Only line"], 1);
        let classified = classify(
            pages,
            &[vec![3.0]],
            &[vec![3.0]],
            &params(2.0, 2.0, vec![1.0]),
        );

        assert_eq!(classified[0][0].line_type, LineType::Header);
        assert_eq!(classified[0][0].footer_score, 3.0);
    }

    #[test]
    fn test_footer_wins_with_strictly_higher_score() {
        let pages = one_page(&["Only line"], 1);
        let classified = classify(
            pages,
            &[vec![1.0]],
            &[vec![3.0]],
            &params(2.0, 2.0, vec![1.0]),
        );

        // Header check failed (1.0 < 2.0); footer beats the header score
        assert_eq!(classified[0][0].line_type, LineType::Footer);
        assert!(classified[0][0].footer_score > classified[0][0].header_score);
    }

    #[test]
    fn test_footer_against_default_header_score() {
        // Footer-only candidate: header score stays at the 0.0 default
        let pages = one_page(&["Head", "Body", "Foot"], 1);
        let classified = classify(
            pages,
            &[vec![0.5]],
            &[vec![2.5]],
            &params(2.0, 2.0, vec![1.0]),
        );

        assert_eq!(classified[0][2].line_type, LineType::Footer);
        assert_eq!(classified[0][2].header_score, 0.0);
    }

    #[test]
    fn test_below_thresholds_stays_body() {
        let pages = one_page(&["Head", "Body", "Foot"], 1);
        let classified = classify(
            pages,
            &[vec![1.0]],
            &[vec![1.0]],
            &params(2.0, 2.0, vec![1.0]),
        );

        for line in &classified[0] {
            assert_eq!(line.line_type, LineType::Body);
        }
        // Scores are still recorded on the candidates
        assert_eq!(classified[0][0].header_score, 1.0);
        assert_eq!(classified[0][2].footer_score, 1.0);
    }

    #[test]
    fn test_footer_slot_indexing_bottom_up() {
        let pages = one_page(&["a", "b", "c", "d"], 2);
        // Footer slots: d -> slot 1 (score 4.0), c -> slot 0 (score 3.0)
        let classified = classify(
            pages,
            &[vec![0.0, 0.0]],
            &[vec![3.0, 4.0]],
            &params(10.0, 2.5, vec![1.0, 0.5]),
        );

        assert_eq!(classified[0][3].footer_score, 4.0);
        assert_eq!(classified[0][2].footer_score, 3.0);
        assert_eq!(classified[0][3].line_type, LineType::Footer);
        assert_eq!(classified[0][2].line_type, LineType::Footer);
    }
}
