//! CLI output formatting.

use std::io::{self, Write};

use clap::ValueEnum;

use strassen_orchestration::interfaces::RunReport;

/// How a report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Render the human-readable report, one line per entry.
#[must_use]
pub fn format_report(report: &RunReport) -> Vec<String> {
    let n = report.true_size as u128;
    let mut lines = Vec::with_capacity(4);
    if report.embedded {
        lines.push(format!(
            "embedded n = {} into n' = {} (m = {}, k = {})",
            report.true_size,
            report.size,
            report.embedding.base_size,
            report.embedding.depth
        ));
    }
    lines.push(format!(
        "n = {n} elements = {} muls = {} adds = {}",
        report.elements(),
        report.counts.multiplications,
        report.counts.additions
    ));
    lines.push(format!(
        "Reference n^3 = {} n^2(n-1) = {}",
        report.baseline.multiplications, report.baseline.additions
    ));
    lines.push(format!(
        "Strassen advantage: muls = {} adds = {} total = {}",
        report.advantage.multiplications, report.advantage.additions, report.advantage.total
    ));
    lines
}

/// Bare counts for quiet mode: `<muls> <adds>`.
#[must_use]
pub fn format_quiet(report: &RunReport) -> String {
    format!(
        "{} {}",
        report.counts.multiplications, report.counts.additions
    )
}

/// Render the report as pretty JSON.
pub fn format_json(report: &RunReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Write text to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{contents}")?;
    Ok(())
}
