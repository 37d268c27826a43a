//! Application entry point and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use strassen_cli::output::{format_json, write_to_file};
use strassen_cli::{CliReportPresenter, OutputFormat, StepPrinter};
use strassen_core::observer::OperationObserver;
use strassen_core::observers::LoggingObserver;
use strassen_orchestration::interfaces::ReportPresenter;
use strassen_orchestration::orchestrator::execute_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        strassen_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let presenter = CliReportPresenter::new(config.format, config.quiet);
    let result = run_cli(config, &presenter);
    if let Err(e) = &result {
        presenter.present_error(&format!("{e:#}"));
    }
    result
}

/// Keep stdout parseable when the report is JSON.
fn step_printer(format: OutputFormat) -> StepPrinter {
    match format {
        OutputFormat::Json => StepPrinter::stderr(),
        OutputFormat::Text => StepPrinter::new(),
    }
}

fn run_cli(config: &AppConfig, presenter: &dyn ReportPresenter) -> Result<()> {
    let opts = config.to_options()?;
    debug!(?opts, "resolved options");

    let observer: Arc<dyn OperationObserver> = if config.print_steps {
        Arc::new(step_printer(config.format))
    } else {
        Arc::new(LoggingObserver::new())
    };

    let report = execute_run(&opts, observer)?;
    presenter.present_report(&report);

    if let Some(ref path) = config.output {
        let json = format_json(&report).context("serializing report")?;
        write_to_file(path, &json).with_context(|| format!("writing report to {path}"))?;
    }

    Ok(())
}
