//! Core orchestration: input generation, the counted product, and its
//! self-checks.

use std::sync::Arc;

use ndarray::Array2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use strassen_core::complexity::{predict_counts, OperationCounts};
use strassen_core::embedding::{derive_embedding, pad, top_left, Embedding};
use strassen_core::matrix_ops::{all_close, direct_multiply, max_abs_error};
use strassen_core::observer::OperationObserver;
use strassen_core::options::{Options, RunMode};
use strassen_core::{Matrix, MatrixView, StrassenError, StrassenMultiplier};

use crate::interfaces::RunReport;

/// Run whichever mode `opts` selects.
pub fn execute_run(
    opts: &Options,
    observer: Arc<dyn OperationObserver>,
) -> Result<RunReport, StrassenError> {
    match opts.mode {
        RunMode::Explicit { base_size, depth } => random_run(base_size, depth, opts, observer),
        RunMode::Embedded { n } => embedded_run(n, opts, observer),
    }
}

/// Multiply two random `m · 2^k` matrices, verify, and report.
pub fn random_run(
    base_size: usize,
    depth: u32,
    opts: &Options,
    observer: Arc<dyn OperationObserver>,
) -> Result<RunReport, StrassenError> {
    let embedding = Embedding::explicit(base_size, depth)?;
    let n = embedding.size;
    info!(n, base_size, depth, "starting random run");

    let mut rng = make_rng(opts.seed);
    let a = random_matrix(&mut rng, n);
    let b = random_matrix(&mut rng, n);

    let (product, counts) = multiplier(&embedding, opts, observer).multiply(a.view(), b.view())?;
    let max_error = verify_product(product.view(), a.view(), b.view(), opts)?;
    check_counts(counts, &embedding)?;

    info!(n, multiplications = counts.multiplications, additions = counts.additions, "random run complete");
    Ok(RunReport::new(embedding, n, counts, max_error))
}

/// Embed two random `n × n` matrices into a derived `m · 2^k` size,
/// multiply the padded pair, verify the top-left block, and report.
pub fn embedded_run(
    n: usize,
    opts: &Options,
    observer: Arc<dyn OperationObserver>,
) -> Result<RunReport, StrassenError> {
    let embedding = derive_embedding(n)?;
    info!(
        n,
        padded = embedding.size,
        base_size = embedding.base_size,
        depth = embedding.depth,
        "starting embedded run"
    );

    let mut rng = make_rng(opts.seed);
    let a = random_matrix(&mut rng, n);
    let b = random_matrix(&mut rng, n);
    let padded_a = pad(a.view(), embedding.size)?;
    let padded_b = pad(b.view(), embedding.size)?;

    let (product, counts) =
        multiplier(&embedding, opts, observer).multiply(padded_a.view(), padded_b.view())?;
    let corner = top_left(product.view(), n)?;
    let max_error = verify_product(corner, a.view(), b.view(), opts)?;
    check_counts(counts, &embedding)?;

    info!(n, multiplications = counts.multiplications, additions = counts.additions, "embedded run complete");
    Ok(RunReport::new(embedding, n, counts, max_error))
}

fn multiplier(
    embedding: &Embedding,
    opts: &Options,
    observer: Arc<dyn OperationObserver>,
) -> StrassenMultiplier {
    StrassenMultiplier::new(embedding.base_size)
        .verbose(opts.verbose)
        .with_observer(observer)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// `n × n` matrix of uniform samples from `[0, 1)`.
pub fn random_matrix<R: Rng>(rng: &mut R, n: usize) -> Matrix {
    Array2::from_shape_fn((n, n), |_| rng.gen::<f64>())
}

/// Compare `actual` with the direct product `a · b`.
///
/// Returns the largest absolute error, or [`StrassenError::Mismatch`] when
/// any element is outside the tolerances in `opts`.
pub fn verify_product(
    actual: MatrixView<'_>,
    a: MatrixView<'_>,
    b: MatrixView<'_>,
    opts: &Options,
) -> Result<f64, StrassenError> {
    let expected = direct_multiply(a, b);
    let max_error = max_abs_error(actual, expected.view());
    debug!(max_error, "verified against direct product");
    if !all_close(actual, expected.view(), opts.rtol, opts.atol) {
        return Err(StrassenError::Mismatch { max_error });
    }
    Ok(max_error)
}

/// Measured counts must equal the closed form for the embedding.
pub fn check_counts(measured: OperationCounts, embedding: &Embedding) -> Result<(), StrassenError> {
    let predicted = predict_counts(embedding.base_size, embedding.depth);
    if measured != predicted {
        return Err(StrassenError::CountMismatch {
            measured,
            predicted,
        });
    }
    Ok(())
}
