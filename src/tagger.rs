//! Candidate tagging and text normalization.
//!
//! The first and last K non-blank lines of each page are eligible for
//! cross-page comparison. Blank lines are skipped, not treated as boundaries,
//! and a line may be tagged for both roles on short pages.

use crate::models::LineRecord;

/// A line qualifies as a candidate if it has any non-whitespace content.
pub fn is_valid_candidate(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Normalize a line for comparison: collapse whitespace runs to single
/// spaces, trim, and replace every maximal run of decimal digits with `@`.
///
/// This neutralizes page numbers and dates while preserving structure:
/// `"Page 123"` becomes `"Page @"`, `"2024-01-15"` becomes `"@-@-@"`.
pub fn normalize_text(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let mut normalized = String::with_capacity(collapsed.len());
    let mut in_digits = false;
    for ch in collapsed.chars() {
        if ch.is_ascii_digit() {
            if !in_digits {
                normalized.push('@');
                in_digits = true;
            }
        } else {
            normalized.push(ch);
            in_digits = false;
        }
    }
    normalized
}

/// Build line records for a document and tag header/footer candidates.
///
/// Empty pages are dropped entirely and never appear downstream. Each
/// retained page keeps its full line list with original indices; up to
/// `slot_count` non-blank lines from the top are tagged as header candidates
/// and up to `slot_count` from the bottom as footer candidates.
pub fn tag_candidates(doc: &[Vec<String>], slot_count: usize) -> Vec<Vec<LineRecord>> {
    let mut pages: Vec<Vec<LineRecord>> = doc
        .iter()
        .filter(|page| !page.is_empty())
        .map(|page| {
            page.iter()
                .enumerate()
                .map(|(line_index, text)| LineRecord::new(text, line_index))
                .collect()
        })
        .collect();

    for page in &mut pages {
        tag_header_candidates(page, slot_count);
        tag_footer_candidates(page, slot_count);
    }

    pages
}

/// Tag the top non-blank lines as header candidates.
fn tag_header_candidates(page: &mut [LineRecord], slot_count: usize) {
    let mut tagged = 0;
    for line in page.iter_mut() {
        if tagged >= slot_count {
            break;
        }
        if is_valid_candidate(&line.text) {
            line.is_header_candidate = true;
            line.cleaned_text = normalize_text(&line.text);
            tagged += 1;
        }
    }
}

/// Tag the bottom non-blank lines as footer candidates.
fn tag_footer_candidates(page: &mut [LineRecord], slot_count: usize) {
    let mut tagged = 0;
    for line in page.iter_mut().rev() {
        if tagged >= slot_count {
            break;
        }
        if is_valid_candidate(&line.text) {
            line.is_footer_candidate = true;
            line.cleaned_text = normalize_text(&line.text);
            tagged += 1;
        }
    }
}
