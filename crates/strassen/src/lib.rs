//! Strassen operation counter library: application logic for the CLI.

pub mod app;
pub mod config;
pub mod errors;
pub mod logging;
