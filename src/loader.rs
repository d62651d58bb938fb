//! Document loading.
//!
//! The pipeline consumes an already-segmented document: an ordered sequence
//! of pages, each an ordered sequence of line strings. Two on-disk formats
//! are supported: a JSON array of arrays of strings (`.json`), and plain text
//! with form-feed characters separating pages (anything else).

use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Load a document from a file, choosing the format by extension.
pub fn load_document(path: &Path) -> Result<Vec<Vec<String>>, DocumentError> {
    let contents = fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => parse_json_document(&contents),
        _ => Ok(parse_text_document(&contents)),
    }
}

/// Parse a JSON array-of-arrays document: `[["line", ...], ...]`.
pub fn parse_json_document(contents: &str) -> Result<Vec<Vec<String>>, DocumentError> {
    Ok(serde_json::from_str(contents)?)
}

/// Split plain text into pages on form feeds, then pages into lines.
///
/// A trailing newline does not produce a phantom blank line, but interior
/// blank lines are preserved -- the tagger relies on seeing them.
pub fn parse_text_document(contents: &str) -> Vec<Vec<String>> {
    contents
        .split('\u{c}')
        .map(|page| {
            let page = page.strip_suffix('\n').unwrap_or(page);
            if page.is_empty() {
                Vec::new()
            } else {
                page.lines().map(|line| line.to_string()).collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_single_page() {
        let doc = parse_text_document("line 1\nline 2\n");
        assert_eq!(doc, vec![vec!["line 1".to_string(), "line 2".to_string()]]);
    }

    #[test]
    fn test_parse_text_form_feed_pages() {
        let doc = parse_text_document("a\nb\n\u{c}c\nd\n");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc[0], vec!["a", "b"]);
        assert_eq!(doc[1], vec!["c", "d"]);
    }

    #[test]
    fn test_parse_text_preserves_interior_blank_lines() {
        let doc = parse_text_document("a\n\nb\n");
        assert_eq!(doc[0], vec!["a", "", "b"]);
    }

    #[test]
    fn test_parse_text_empty_page_between_feeds() {
        let doc = parse_text_document("a\n\u{c}\u{c}b\n");
        assert_eq!(doc.len(), 3);
        assert!(doc[1].is_empty());
    }

    #[test]
    fn test_parse_json_document() {
        let doc = parse_json_document(r#"[["Header", "Body"], ["Header", "Other"]]"#).unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc[0], vec!["Header", "Body"]);
    }

    #[test]
    fn test_parse_json_rejects_malformed() {
        assert!(parse_json_document(r#"{"not": "a document"}"#).is_err());
    }
}
