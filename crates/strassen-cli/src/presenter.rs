//! CLI report presenter.

use tracing::warn;

use strassen_orchestration::interfaces::{ReportPresenter, RunReport};

use crate::output::{format_json, format_quiet, format_report, OutputFormat};

/// Prints reports to stdout and errors to stderr.
pub struct CliReportPresenter {
    format: OutputFormat,
    quiet: bool,
}

impl CliReportPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }
}

impl ReportPresenter for CliReportPresenter {
    fn present_report(&self, report: &RunReport) {
        match self.format {
            OutputFormat::Json => match format_json(report) {
                Ok(json) => println!("{json}"),
                Err(e) => warn!(error = %e, "could not serialize report"),
            },
            OutputFormat::Text if self.quiet => println!("{}", format_quiet(report)),
            OutputFormat::Text => {
                for line in format_report(report) {
                    println!("{line}");
                }
            }
        }
    }

    fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
