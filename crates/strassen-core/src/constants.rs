//! Defaults and fixed parameters of the Strassen scheme.

/// Default base case dimension (`-m`).
pub const DEFAULT_BASE_SIZE: usize = 1;

/// Default recursion depth (`-k`).
pub const DEFAULT_DEPTH: u32 = 2;

/// Relative tolerance used when checking a product against the direct one.
pub const DEFAULT_RTOL: f64 = 1e-5;

/// Absolute tolerance used when checking a product against the direct one.
pub const DEFAULT_ATOL: f64 = 1e-8;

/// Recursive products per Strassen step.
pub const PRODUCTS_PER_STEP: u64 = 7;

/// Quadrant additions per Strassen step: 10 feeding the products, 8 combining them.
pub const ADDITIONS_PER_STEP: u64 = 18;

/// The automatic embedding uses `k = max(floor(log2 n) - 4, 1)`.
pub const EMBEDDING_DEPTH_OFFSET: u32 = 4;

/// Smallest depth chosen by the automatic embedding.
pub const MIN_EMBEDDING_DEPTH: u32 = 1;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// The Strassen product or its counts failed the self-check.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}
