//! # strassen-orchestration
//!
//! Driver routines: random and embedded runs, verification against the
//! direct product, and the resulting count reports.

pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{ReportPresenter, RunReport};
pub use orchestrator::{embedded_run, execute_run, random_run};
