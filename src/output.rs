//! Output formatting for detection results (JSON, CSV, plain text).

use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

use crate::models::{DetectionReport, DetectionSummary, DetectorParams, LineRecord, LineType};

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Assemble the serializable report for an annotated document.
pub fn build_report(pages: Vec<Vec<LineRecord>>, params: &DetectorParams) -> DetectionReport {
    DetectionReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        parameters: params.clone(),
        summary: DetectionSummary::from_pages(&pages),
        pages,
    }
}

/// Write a detection report as pretty-printed JSON.
pub fn write_json<W: Write>(report: &DetectionReport, writer: &mut W) -> Result<(), OutputError> {
    let json = serde_json::to_string_pretty(report)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write a detection report as JSON to a file.
pub fn write_json_file(report: &DetectionReport, path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_json(report, &mut file)
}

/// Write annotated lines as CSV, one row per line record.
pub fn write_csv<W: Write>(pages: &[Vec<LineRecord>], writer: &mut W) -> Result<(), OutputError> {
    writeln!(
        writer,
        "page,line,line_type,header_candidate,footer_candidate,header_score,footer_score,text"
    )?;

    for (page_idx, page) in pages.iter().enumerate() {
        for line in page {
            writeln!(
                writer,
                "{},{},{},{},{},{},{},{}",
                page_idx,
                line.line_index,
                line_type_label(line.line_type),
                line.is_header_candidate,
                line.is_footer_candidate,
                line.header_score,
                line.footer_score,
                csv_escape(&line.text)
            )?;
        }
    }

    Ok(())
}

/// Write annotated lines as CSV to a file.
pub fn write_csv_file(pages: &[Vec<LineRecord>], path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_csv(pages, &mut file)
}

/// Write body-only pages as plain text with form-feed page separators,
/// matching the loader's text format.
pub fn write_body_text<W: Write>(pages: &[Vec<String>], writer: &mut W) -> Result<(), OutputError> {
    for (page_idx, page) in pages.iter().enumerate() {
        if page_idx > 0 {
            write!(writer, "\u{c}")?;
        }
        for line in page {
            writeln!(writer, "{line}")?;
        }
    }
    Ok(())
}

/// Write body-only pages as plain text to a file.
pub fn write_body_text_file(pages: &[Vec<String>], path: &Path) -> Result<(), OutputError> {
    let mut file = std::fs::File::create(path)?;
    write_body_text(pages, &mut file)
}

/// Print detection counts to stderr.
pub fn print_summary(summary: &DetectionSummary) {
    eprintln!("Pages analyzed:  {}", summary.page_count);
    eprintln!("Header lines:    {}", summary.header_lines);
    eprintln!("Footer lines:    {}", summary.footer_lines);
    eprintln!("Body lines:      {}", summary.body_lines);
}

fn line_type_label(line_type: LineType) -> &'static str {
    match line_type {
        LineType::Header => "header",
        LineType::Footer => "footer",
        LineType::Body => "body",
    }
}

/// Quote a CSV field if it contains a delimiter, quote, or newline.
fn csv_escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LineRecord;

    fn annotated_page() -> Vec<Vec<LineRecord>> {
        let mut header = LineRecord::new("Title", 0);
        header.is_header_candidate = true;
        header.header_score = 3.0;
        header.line_type = LineType::Header;
        let body = LineRecord::new("Some, \"quoted\" text", 1);
        vec![vec![header, body]]
    }

    #[test]
    fn test_write_json_round_trip() {
        let report = build_report(annotated_page(), &DetectorParams::default());
        let mut buf = Vec::new();
        write_json(&report, &mut buf).unwrap();

        let parsed: DetectionReport = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed.summary.header_lines, 1);
        assert_eq!(parsed.pages[0][0].line_type, LineType::Header);
    }

    #[test]
    fn test_write_csv_escapes_text() {
        let pages = annotated_page();
        let mut buf = Vec::new();
        write_csv(&pages, &mut buf).unwrap();

        let out = String::from_utf8(buf).unwrap();
        let mut lines = out.lines();
        assert!(lines.next().unwrap().starts_with("page,line,line_type"));
        assert!(out.contains("0,0,header,true,false,3,0,Title"));
        assert!(out.contains("\"Some, \"\"quoted\"\" text\""));
    }

    #[test]
    fn test_write_body_text_page_separator() {
        let pages = vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string()],
        ];
        let mut buf = Vec::new();
        write_body_text(&pages, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "a\nb\n\u{c}c\n");
    }

    #[test]
    fn test_report_version_stamped() {
        let report = build_report(Vec::new(), &DetectorParams::default());
        assert_eq!(report.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.summary.page_count, 0);
    }
}
