//! Application configuration from CLI flags and environment.

use clap::Parser;

use strassen_cli::OutputFormat;
use strassen_core::constants::{DEFAULT_BASE_SIZE, DEFAULT_DEPTH};
use strassen_core::{Options, StrassenError};

/// Strassen-rs: count the scalar operations of Strassen matrix multiplication
/// and compare them with the naive product.
#[derive(Parser, Debug)]
#[command(name = "strassen", version, about)]
pub struct AppConfig {
    /// Base case dimension: n = M * 2^k.
    #[arg(short = 'm', default_value_t = DEFAULT_BASE_SIZE as i64, allow_negative_numbers = true)]
    pub m: i64,

    /// Recursion depth: n = m * 2^K.
    #[arg(short = 'k', default_value_t = i64::from(DEFAULT_DEPTH), allow_negative_numbers = true)]
    pub k: i64,

    /// True matrix size; embeds it into a derived m * 2^k, overriding -m and -k.
    #[arg(short = 'n', env = "STRASSEN_N", allow_negative_numbers = true)]
    pub n: Option<i64>,

    /// Print the operation count of every step.
    #[arg(short = 'p', long = "print-steps")]
    pub print_steps: bool,

    /// Seed for the random input matrices.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the JSON report to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only print the two counts).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validate the size flags and build run options.
    pub fn to_options(&self) -> Result<Options, StrassenError> {
        Ok(Options::from_args(self.m, self.k, self.n)?
            .with_verbose(self.print_steps)
            .with_seed(self.seed))
    }
}
