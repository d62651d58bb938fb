//! Data structures for the header/footer detection pipeline.

use serde::{Deserialize, Serialize};

/// Classification assigned to a line after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    Header,
    Footer,
    /// Everything that is not a detected header or footer.
    #[default]
    Body,
}

/// A single annotated line of a page.
///
/// Created once per run during tagging; scoring fills in the score fields and
/// classification sets `line_type`. `cleaned_text` is only populated for
/// candidate lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub text: String,
    pub cleaned_text: String,
    /// Position within the page, 0-based, fixed at creation.
    pub line_index: usize,
    pub is_header_candidate: bool,
    pub is_footer_candidate: bool,
    pub header_score: f64,
    pub footer_score: f64,
    pub line_type: LineType,
}

impl LineRecord {
    /// Build an untagged body record for a raw line.
    pub fn new(text: &str, line_index: usize) -> Self {
        LineRecord {
            text: text.to_string(),
            cleaned_text: String::new(),
            line_index,
            is_header_candidate: false,
            is_footer_candidate: false,
            header_score: 0.0,
            footer_score: 0.0,
            line_type: LineType::Body,
        }
    }
}

/// Detection parameters.
///
/// `weights` are ordered from the top of the page down for headers; the
/// scorer reverses them for footers so the highest weight sits on the line
/// closest to the bottom edge. The number of weights sets K, the candidate
/// count per page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorParams {
    /// Pages considered on each side of the current page.
    pub window_size: usize,
    pub header_threshold: f64,
    /// Defaults to `header_threshold` when not set explicitly.
    pub footer_threshold: f64,
    pub weights: Vec<f64>,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            window_size: 8,
            header_threshold: 8.0,
            footer_threshold: 8.0,
            weights: vec![1.0, 0.75, 0.5, 0.5, 0.5],
        }
    }
}

impl DetectorParams {
    /// Number of candidate slots per page (K).
    pub fn slot_count(&self) -> usize {
        self.weights.len()
    }

    pub fn max_weight(&self) -> f64 {
        self.weights.iter().copied().fold(0.0, f64::max)
    }

    /// Check thresholds against the interior-page score ceiling.
    ///
    /// A threshold above `2 * window_size * max(weights) + 1` can never be
    /// met, so no lines of that type would ever be detected. This is a
    /// usability signal, not an error: processing proceeds normally either
    /// way, and the caller decides how to surface the warning.
    pub fn validate(&self) -> Validation {
        let max_score = 2.0 * self.window_size as f64 * self.max_weight() + 1.0;
        let mut over = Vec::new();

        if self.header_threshold > max_score {
            over.push(format!("Header threshold ({})", self.header_threshold));
        }
        if self.footer_threshold > max_score {
            over.push(format!("Footer threshold ({})", self.footer_threshold));
        }

        if over.is_empty() {
            Validation::Ok
        } else {
            Validation::Warning(format!(
                "{} exceeds maximum possible score ({}).",
                over.join(" and "),
                max_score
            ))
        }
    }
}

/// Outcome of parameter validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Ok,
    Warning(String),
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Ok)
    }
}

/// Per-document detection counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionSummary {
    pub page_count: usize,
    pub header_lines: usize,
    pub footer_lines: usize,
    pub body_lines: usize,
}

impl DetectionSummary {
    /// Tally line types across an annotated document.
    pub fn from_pages(pages: &[Vec<LineRecord>]) -> Self {
        let mut summary = DetectionSummary {
            page_count: pages.len(),
            header_lines: 0,
            footer_lines: 0,
            body_lines: 0,
        };
        for line in pages.iter().flatten() {
            match line.line_type {
                LineType::Header => summary.header_lines += 1,
                LineType::Footer => summary.footer_lines += 1,
                LineType::Body => summary.body_lines += 1,
            }
        }
        summary
    }
}

/// Full detection result for serialized output.
#[derive(Debug, Serialize, Deserialize)]
pub struct DetectionReport {
    pub version: String,
    pub parameters: DetectorParams,
    pub summary: DetectionSummary,
    pub pages: Vec<Vec<LineRecord>>,
}
