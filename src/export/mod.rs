//! Report export: plain-text and CSV files under the results directory.
//!
//! The exporter runs once, after the input loop: it asks for a format, then a
//! filename (blank means a timestamped auto-name), writes the file, and
//! prints its absolute path. An existing file with the same resolved name is
//! silently replaced. Write failures are fatal and propagate to the caller.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{DateTime, Local};
use colored::Colorize;
use tracing::info;

use crate::error::Result;
use crate::reports::SummaryReport;
use crate::session::LineReader;
use crate::utils::format_amount;

/// Fixed relative directory report files land in, created at startup.
pub const RESULTS_DIR: &str = "Portfolio_Results";

const SEPARATOR_WIDTH: usize = 50;
const CSV_HEADER: [&str; 4] = ["Stock", "Quantity", "Price", "Total"];

/// Supported export file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
        }
    }

    /// Parse the export-choice answer; anything other than "txt"/"csv"
    /// (case-insensitive) means skip.
    pub fn parse_choice(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "txt" => Some(ExportFormat::Text),
            "csv" => Some(ExportFormat::Csv),
            _ => None,
        }
    }
}

/// Create the results directory if it does not exist yet.
pub fn ensure_results_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create results directory {}", dir.display()))
}

/// Resolve the file to write: blank input synthesizes
/// `portfolio_<YYYY-MM-DD_HH-MM-SS>.<ext>`; a name without the format's
/// extension gets it appended; everything lands under `dir`.
pub fn resolve_filename(
    dir: &Path,
    raw: &str,
    format: ExportFormat,
    now: DateTime<Local>,
) -> PathBuf {
    let ext = format.extension();
    let name = raw.trim();

    if name.is_empty() {
        let stamp = now.format("%Y-%m-%d_%H-%M-%S");
        dir.join(format!("portfolio_{}.{}", stamp, ext))
    } else if name.ends_with(&format!(".{}", ext)) {
        dir.join(name)
    } else {
        dir.join(format!("{}.{}", name, ext))
    }
}

/// Write the human-readable fixed-width report.
pub fn write_text_report(path: &Path, report: &SummaryReport) -> Result<()> {
    let mut out = String::new();
    out.push_str("Investment Summary\n");
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    for line in &report.lines {
        out.push_str(&format!(
            "{:<6} → Price: ${:<6} | Quantity: {:<6} | Total: ${}\n",
            line.symbol,
            line.price.to_string(),
            line.quantity,
            format_amount(line.total)
        ));
    }
    out.push_str(&"=".repeat(SEPARATOR_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "Total Investment: ${}\n",
        format_amount(report.total)
    ));

    let mut file = File::create(path)
        .with_context(|| format!("failed to create report file {}", path.display()))?;
    file.write_all(out.as_bytes())
        .with_context(|| format!("failed to write report file {}", path.display()))?;
    Ok(())
}

/// Write the tabular report: header, one raw-value row per line, a blank
/// separator row, then the grand-total row.
pub fn write_csv_report(path: &Path, report: &SummaryReport) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for line in &report.lines {
        writer.serialize(line)?;
    }

    let mut body = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("failed to flush csv body: {}", e))?;
    // The separator and totals rows are appended raw: the csv writer renders
    // an empty record as a lone quoted field, not a blank line
    body.extend_from_slice(format!("\nFinal Total,,,{}\n", report.total).as_bytes());

    std::fs::write(path, body)
        .with_context(|| format!("failed to write report file {}", path.display()))?;
    Ok(())
}

/// Prompt-driven export step: format choice, filename, write, confirmation.
pub fn run_export(
    reader: &mut dyn LineReader,
    report: &SummaryReport,
    dir: &Path,
) -> Result<()> {
    let choice = reader
        .read_line("\nDo you want to save results (txt/csv/none)? ")?
        .unwrap_or_default();

    let Some(format) = ExportFormat::parse_choice(&choice) else {
        println!("{} Results not saved.", "ℹ".blue().bold());
        return Ok(());
    };

    let raw_name = reader
        .read_line("Enter filename (leave blank for auto): ")?
        .unwrap_or_default();
    let path = resolve_filename(dir, &raw_name, format, Local::now());

    match format {
        ExportFormat::Text => write_text_report(&path, report)?,
        ExportFormat::Csv => write_csv_report(&path, report)?,
    }

    info!("report written to {}", path.display());
    let absolute = std::fs::canonicalize(&path).unwrap_or_else(|_| path.clone());
    println!(
        "{} Results saved to {}",
        "✓".green().bold(),
        absolute.display()
    );
    Ok(())
}
