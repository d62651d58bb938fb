//! Headfoot command-line interface.
//!
//! Detects repeated header and footer lines in multi-page text documents and
//! either annotates every line or strips the detected lines away.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

mod classify;
mod detect;
mod loader;
mod matrix;
mod models;
mod output;
mod score;
mod tagger;

use detect::{strip_classified, Detector};
use loader::load_document;
use models::{DetectorParams, Validation};
use output::{
    build_report, print_summary, write_body_text, write_body_text_file, write_csv,
    write_csv_file, write_json, write_json_file,
};

#[derive(Parser)]
#[command(name = "headfoot")]
#[command(about = "Header and footer detection for multi-page text documents")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Output format for annotated results
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// JSON report with parameters, summary, and per-line records
    Json,
    /// CSV with one row per line record
    Csv,
}

#[derive(Subcommand)]
enum Commands {
    /// Annotate every line of a document with scores and a classification
    ///
    /// Detection parameters default to DetectorParams::default(). Override
    /// any parameter explicitly to customize behavior.
    Detect {
        /// Input document: .json (array of pages of lines) or plain text
        /// with form-feed page separators
        #[arg(long)]
        input: PathBuf,

        /// Output file path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Pages compared on each side of the current page [default: 8]
        #[arg(long)]
        window_size: Option<usize>,

        /// Minimum score to classify a line as a header [default: 8.0]
        #[arg(long)]
        header_threshold: Option<f64>,

        /// Minimum score to classify a line as a footer [default: header threshold]
        #[arg(long)]
        footer_threshold: Option<f64>,

        /// Per-slot weights, top-down, comma-separated; length sets the
        /// candidate count per page [default: 1.0,0.75,0.5,0.5,0.5]
        #[arg(long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,

        /// Suppress progress and summary output
        #[arg(long)]
        quiet: bool,
    },

    /// Remove detected header and footer lines, keeping body text
    Strip {
        /// Input document: .json (array of pages of lines) or plain text
        /// with form-feed page separators
        #[arg(long)]
        input: PathBuf,

        /// Output file path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Pages compared on each side of the current page [default: 8]
        #[arg(long)]
        window_size: Option<usize>,

        /// Minimum score to classify a line as a header [default: 8.0]
        #[arg(long)]
        header_threshold: Option<f64>,

        /// Minimum score to classify a line as a footer [default: header threshold]
        #[arg(long)]
        footer_threshold: Option<f64>,

        /// Per-slot weights, top-down, comma-separated; length sets the
        /// candidate count per page [default: 1.0,0.75,0.5,0.5,0.5]
        #[arg(long, value_delimiter = ',')]
        weights: Option<Vec<f64>>,

        /// Suppress progress and summary output
        #[arg(long)]
        quiet: bool,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Detect {
            input,
            output,
            format,
            window_size,
            header_threshold,
            footer_threshold,
            weights,
            quiet,
        } => {
            let params = build_params(window_size, header_threshold, footer_threshold, weights);
            let detector = prepare_detector(params);

            if !quiet {
                eprintln!("Loading document {}...", input.display());
            }
            let doc = load_document(&input)?;

            if !quiet {
                eprintln!("Scoring {} pages...", doc.iter().filter(|p| !p.is_empty()).count());
            }
            let annotated = detector.annotate_with_progress(&doc, !quiet);

            let report = build_report(annotated, detector.params());
            if !quiet {
                print_summary(&report.summary);
            }

            match (format, output) {
                (OutputFormat::Json, Some(path)) => {
                    write_json_file(&report, &path)?;
                    if !quiet {
                        eprintln!("Wrote {}", path.display());
                    }
                }
                (OutputFormat::Json, None) => {
                    let mut stdout = std::io::stdout();
                    write_json(&report, &mut stdout)?;
                }
                (OutputFormat::Csv, Some(path)) => {
                    write_csv_file(&report.pages, &path)?;
                    if !quiet {
                        eprintln!("Wrote {}", path.display());
                    }
                }
                (OutputFormat::Csv, None) => {
                    let mut stdout = std::io::stdout();
                    write_csv(&report.pages, &mut stdout)?;
                }
            }
        }

        Commands::Strip {
            input,
            output,
            window_size,
            header_threshold,
            footer_threshold,
            weights,
            quiet,
        } => {
            let params = build_params(window_size, header_threshold, footer_threshold, weights);
            let detector = prepare_detector(params);

            if !quiet {
                eprintln!("Loading document {}...", input.display());
            }
            let doc = load_document(&input)?;

            let annotated = detector.annotate_with_progress(&doc, !quiet);
            if !quiet {
                print_summary(&models::DetectionSummary::from_pages(&annotated));
            }
            let body = strip_classified(&annotated);

            match output {
                Some(path) => {
                    write_body_text_file(&body, &path)?;
                    if !quiet {
                        eprintln!("Wrote {}", path.display());
                    }
                }
                None => {
                    let mut stdout = std::io::stdout();
                    write_body_text(&body, &mut stdout)?;
                }
            }
        }
    }

    Ok(())
}

/// Overlay user-specified values onto library defaults.
///
/// An unset footer threshold follows the effective header threshold, not the
/// library default, so `--header-threshold 5` lowers both.
fn build_params(
    window_size: Option<usize>,
    header_threshold: Option<f64>,
    footer_threshold: Option<f64>,
    weights: Option<Vec<f64>>,
) -> DetectorParams {
    let defaults = DetectorParams::default();
    let header_threshold = header_threshold.unwrap_or(defaults.header_threshold);

    DetectorParams {
        window_size: window_size.unwrap_or(defaults.window_size),
        header_threshold,
        footer_threshold: footer_threshold.unwrap_or(header_threshold),
        weights: weights.unwrap_or(defaults.weights),
    }
}

/// Surface validation warnings on stderr and build the detector.
fn prepare_detector(params: DetectorParams) -> Detector {
    if let Validation::Warning(msg) = params.validate() {
        eprintln!("warning: {msg}");
    }
    Detector::new(params)
}
