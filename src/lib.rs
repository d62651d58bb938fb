//! Headfoot: header and footer detection for multi-page text documents.
//!
//! Classifies each line of a document as header, footer, or body by
//! exploiting repetition across pages: lines that recur in the same relative
//! position on many pages (company names, titles, page numbers) score high
//! when compared against the same slot on neighboring pages, even when the
//! text varies slightly (embedded page numbers are normalized away).
//!
//! Only the text-repetition signal is used; there is no geometric or
//! layout-based detection.
//!
//! # Example
//!
//! ```
//! use headfoot::prelude::*;
//!
//! let params = DetectorParams {
//!     window_size: 2,
//!     header_threshold: 2.0,
//!     footer_threshold: 2.0,
//!     weights: vec![1.0],
//! };
//! assert!(params.validate().is_ok());
//! let detector = Detector::new(params);
//!
//! let doc: Vec<Vec<String>> = (1..=4)
//!     .map(|n| {
//!         vec![
//!             "Quarterly Report".to_string(),
//!             format!("Body text for page {n}."),
//!             format!("Page {n} of 4"),
//!         ]
//!     })
//!     .collect();
//!
//! let annotated = detector.annotate(&doc);
//! assert_eq!(annotated[0][0].line_type, LineType::Header);
//! assert_eq!(annotated[0][2].line_type, LineType::Footer);
//!
//! let body = detector.strip(&doc);
//! assert_eq!(body[2], vec!["Body text for page 3.".to_string()]);
//! ```

pub mod classify;
pub mod detect;
pub mod loader;
pub mod matrix;
pub mod models;
pub mod output;
pub mod score;
pub mod tagger;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::classify::classify;
    pub use crate::detect::{strip_classified, Detector};
    pub use crate::loader::{load_document, parse_json_document, parse_text_document, DocumentError};
    pub use crate::matrix::{build_footer_matrix, build_header_matrix, CandidateMatrix};
    pub use crate::models::{
        DetectionReport, DetectionSummary, DetectorParams, LineRecord, LineType, Validation,
    };
    pub use crate::output::{
        build_report, print_summary, write_body_text, write_body_text_file, write_csv,
        write_csv_file, write_json, write_json_file, OutputError,
    };
    pub use crate::score::{default_similarity, page_window, score_matrix, score_row};
    pub use crate::tagger::{is_valid_candidate, normalize_text, tag_candidates};
}

// Re-export commonly used types at the crate root
pub use detect::Detector;
pub use models::{DetectorParams, LineRecord, LineType, Validation};
