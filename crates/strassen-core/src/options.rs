//! Run options and their validation.

use crate::constants::{DEFAULT_ATOL, DEFAULT_BASE_SIZE, DEFAULT_DEPTH, DEFAULT_RTOL};
use crate::embedding::{derive_embedding, Embedding};
use crate::error::StrassenError;

/// How the matrix size is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// `n = base_size · 2^depth`, inputs generated at exactly that size.
    Explicit { base_size: usize, depth: u32 },
    /// True size `n`, embedded into a derived `m · 2^k` and padded.
    Embedded { n: usize },
}

/// Options for one counted multiplication run.
#[derive(Debug, Clone)]
pub struct Options {
    pub mode: RunMode,
    /// Report every counted operation as it happens.
    pub verbose: bool,
    /// Seed for the random inputs; fresh entropy when `None`.
    pub seed: Option<u64>,
    /// Relative tolerance of the correctness check.
    pub rtol: f64,
    /// Absolute tolerance of the correctness check.
    pub atol: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mode: RunMode::Explicit {
                base_size: DEFAULT_BASE_SIZE,
                depth: DEFAULT_DEPTH,
            },
            verbose: false,
            seed: None,
            rtol: DEFAULT_RTOL,
            atol: DEFAULT_ATOL,
        }
    }
}

impl Options {
    /// Build the run mode from raw signed `-m`, `-k`, `-n` values.
    ///
    /// `n`, when present, wins over `m` and `k`. Rejects `m ≤ 0`, `k < 0`,
    /// `n ≤ 0`, and sizes that overflow, before anything is computed.
    pub fn from_args(m: i64, k: i64, n: Option<i64>) -> Result<Self, StrassenError> {
        let mode = match n {
            Some(n) => {
                let n = usize::try_from(n)
                    .ok()
                    .filter(|&n| n >= 1)
                    .ok_or_else(|| {
                        StrassenError::InvalidConfig(format!("n must be at least 1, got {n}"))
                    })?;
                RunMode::Embedded { n }
            }
            None => {
                let base_size = usize::try_from(m)
                    .ok()
                    .filter(|&m| m >= 1)
                    .ok_or_else(|| {
                        StrassenError::InvalidConfig(format!("m must be at least 1, got {m}"))
                    })?;
                let depth = u32::try_from(k).map_err(|_| {
                    StrassenError::InvalidConfig(format!("k must be between 0 and {}, got {k}", u32::MAX))
                })?;
                RunMode::Explicit { base_size, depth }
            }
        };

        let opts = Self {
            mode,
            ..Self::default()
        };
        opts.embedding()?;
        Ok(opts)
    }

    /// The `m · 2^k` size the multiplication actually runs at.
    pub fn embedding(&self) -> Result<Embedding, StrassenError> {
        match self.mode {
            RunMode::Explicit { base_size, depth } => Embedding::explicit(base_size, depth),
            RunMode::Embedded { n } => derive_embedding(n),
        }
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(
            opts.mode,
            RunMode::Explicit {
                base_size: DEFAULT_BASE_SIZE,
                depth: DEFAULT_DEPTH
            }
        );
        assert!(!opts.verbose);
        assert_eq!(opts.embedding().unwrap().size, 4);
    }

    #[test]
    fn explicit_from_args() {
        let opts = Options::from_args(3, 2, None).unwrap();
        assert_eq!(
            opts.mode,
            RunMode::Explicit {
                base_size: 3,
                depth: 2
            }
        );
        assert_eq!(opts.embedding().unwrap().size, 12);
    }

    #[test]
    fn n_overrides_m_and_k() {
        let opts = Options::from_args(-5, -5, Some(10)).unwrap();
        assert_eq!(opts.mode, RunMode::Embedded { n: 10 });
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(matches!(
            Options::from_args(0, 2, None),
            Err(StrassenError::InvalidConfig(_))
        ));
        assert!(matches!(
            Options::from_args(1, -1, None),
            Err(StrassenError::InvalidConfig(_))
        ));
        assert!(matches!(
            Options::from_args(1, 2, Some(0)),
            Err(StrassenError::InvalidConfig(_))
        ));
        assert!(matches!(
            Options::from_args(1, 2, Some(-3)),
            Err(StrassenError::InvalidConfig(_))
        ));
        assert!(matches!(
            Options::from_args(2, 64, None),
            Err(StrassenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_sizes_too_large_to_allocate() {
        assert!(matches!(
            Options::from_args(1, 33, None),
            Err(StrassenError::InvalidConfig(_))
        ));
        assert!(matches!(
            Options::from_args(1, 2, Some(i64::MAX)),
            Err(StrassenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn builders() {
        let opts = Options::default().with_verbose(true).with_seed(Some(7));
        assert!(opts.verbose);
        assert_eq!(opts.seed, Some(7));
    }
}
