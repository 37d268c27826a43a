//! # strassen-cli
//!
//! Report output, per-step operation printing, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod step_printer;

pub use output::OutputFormat;
pub use presenter::CliReportPresenter;
pub use step_printer::StepPrinter;
