//! Strassen-rs: count the scalar operations of Strassen multiplication.

use std::process::ExitCode;

use strassen_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    logging::init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => ExitCode::from(u8::try_from(errors::exit_code(&e)).unwrap_or(1)),
    }
}
