//! Candidate matrices: fixed-width per-page rows of cleaned candidate text.
//!
//! Reshaping candidates into pages x K grids gives stable columnar alignment:
//! comparing slot 0 across pages compares structurally analogous lines even
//! when pages have different lengths.

use crate::models::LineRecord;

/// A pages x K grid of cleaned candidate texts.
///
/// Every page contributes exactly `slot_count` slots; slots without a
/// matching candidate line hold an empty string. Empty slots still take part
/// in scoring, where two empty slots compare as identical.
#[derive(Debug, Clone)]
pub struct CandidateMatrix {
    pub rows: Vec<Vec<String>>,
    pub slot_count: usize,
}

impl CandidateMatrix {
    pub fn page_count(&self) -> usize {
        self.rows.len()
    }
}

/// Build the header matrix: slot 0 is the topmost candidate on each page,
/// filled top-down.
pub fn build_header_matrix(pages: &[Vec<LineRecord>], slot_count: usize) -> CandidateMatrix {
    let rows = pages
        .iter()
        .map(|page| {
            let mut row = vec![String::new(); slot_count];
            let mut slot = 0;
            for line in page {
                if line.is_header_candidate {
                    row[slot] = line.cleaned_text.clone();
                    slot += 1;
                }
            }
            row
        })
        .collect();

    CandidateMatrix { rows, slot_count }
}

/// Build the footer matrix: slot K-1 is the very last candidate on each page,
/// filled bottom-up so unfilled slots sit at the front of the row.
pub fn build_footer_matrix(pages: &[Vec<LineRecord>], slot_count: usize) -> CandidateMatrix {
    let rows = pages
        .iter()
        .map(|page| {
            let mut row = vec![String::new(); slot_count];
            let mut filled = 0;
            for line in page.iter().rev() {
                if line.is_footer_candidate {
                    row[slot_count - 1 - filled] = line.cleaned_text.clone();
                    filled += 1;
                }
            }
            row
        })
        .collect();

    CandidateMatrix { rows, slot_count }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::tag_candidates;

    fn doc(pages: &[&[&str]]) -> Vec<Vec<String>> {
        pages
            .iter()
            .map(|p| p.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_header_and_footer_rows() {
        let doc = doc(&[
            &["Header 1", "Header 2", "Body", "Footer 2", "Footer 1"],
            &["Header A", "Header B", "Content", "Footer B", "Footer A"],
        ]);
        let pages = tag_candidates(&doc, 2);

        let headers = build_header_matrix(&pages, 2);
        let footers = build_footer_matrix(&pages, 2);

        assert_eq!(headers.page_count(), 2);
        assert_eq!(headers.rows[0], vec!["Header @", "Header @"]);
        assert_eq!(footers.rows[0], vec!["Footer @", "Footer @"]);
    }

    #[test]
    fn test_short_page_pads_with_empty() {
        let doc = doc(&[&["Only", "Two"]]);
        let pages = tag_candidates(&doc, 5);

        let headers = build_header_matrix(&pages, 5);
        assert_eq!(headers.rows[0][0], "Only");
        assert_eq!(headers.rows[0][1], "Two");
        assert_eq!(headers.rows[0][2], "");
        assert_eq!(headers.rows[0][4], "");

        // Footer rows fill from the end: slot K-1 is the last line
        let footers = build_footer_matrix(&pages, 5);
        assert_eq!(footers.rows[0][4], "Two");
        assert_eq!(footers.rows[0][3], "Only");
        assert_eq!(footers.rows[0][0], "");
    }

    #[test]
    fn test_footer_slot_order_is_bottom_up() {
        let doc = doc(&[&["top", "mid", "second last", "last"]]);
        let pages = tag_candidates(&doc, 2);

        let footers = build_footer_matrix(&pages, 2);
        assert_eq!(footers.rows[0][1], "last");
        assert_eq!(footers.rows[0][0], "second last");
    }

    #[test]
    fn test_blank_lines_not_in_matrix() {
        let doc = doc(&[&["   ", "Real header", "Body", "Real footer"]]);
        let pages = tag_candidates(&doc, 1);

        let headers = build_header_matrix(&pages, 1);
        assert_eq!(headers.rows[0][0], "Real header");
    }
}
