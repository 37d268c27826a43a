//! Property-based tests for the Strassen core.
//!
//! These drive `StrassenMultiplier`, `OperationCounter`, and the embedding
//! functions through their public API.

use approx::assert_abs_diff_eq;
use ndarray::Array2;
use proptest::prelude::*;

use strassen_core::complexity::{naive_counts, predict_counts};
use strassen_core::embedding::{derive_embedding, pad, top_left};
use strassen_core::matrix_ops::direct_multiply;
use strassen_core::{Matrix, OperationCounter, StrassenMultiplier};

fn matrix_from(values: &[f64], n: usize) -> Matrix {
    Array2::from_shape_fn((n, n), |(i, j)| values[(i * n + j) % values.len()])
}

fn assert_close(actual: &Matrix, expected: &Matrix) {
    assert_eq!(actual.dim(), expected.dim());
    for (x, y) in actual.iter().zip(expected.iter()) {
        assert_abs_diff_eq!(*x, *y, epsilon = 1e-7 * (1.0 + y.abs()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Strassen equals the direct product for every m · 2^k.
    #[test]
    fn strassen_matches_direct(
        base in 1usize..5,
        depth in 0u32..4,
        a_vals in prop::collection::vec(-10.0f64..10.0, 1..64),
        b_vals in prop::collection::vec(-10.0f64..10.0, 1..64),
    ) {
        let n = base << depth;
        let a = matrix_from(&a_vals, n);
        let b = matrix_from(&b_vals, n);
        let (product, _) = StrassenMultiplier::new(base).multiply(a.view(), b.view()).unwrap();
        assert_close(&product, &direct_multiply(a.view(), b.view()));
    }

    /// Measured counts equal the closed form and are value-independent.
    #[test]
    fn counts_are_deterministic(
        base in 1usize..4,
        depth in 0u32..4,
        a_vals in prop::collection::vec(-1.0f64..1.0, 1..16),
        b_vals in prop::collection::vec(-1.0f64..1.0, 1..16),
    ) {
        let n = base << depth;
        let a = matrix_from(&a_vals, n);
        let b = matrix_from(&b_vals, n);
        let multiplier = StrassenMultiplier::new(base);
        let (_, first) = multiplier.multiply(a.view(), b.view()).unwrap();
        let (_, second) = multiplier.multiply(b.view(), a.view()).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(first, predict_counts(base, depth));
    }

    /// Padding both operands keeps the product in the top-left block.
    #[test]
    fn padding_preserves_product(
        n in 1usize..9,
        extra in 0usize..6,
        a_vals in prop::collection::vec(-5.0f64..5.0, 1..32),
        b_vals in prop::collection::vec(-5.0f64..5.0, 1..32),
    ) {
        let a = matrix_from(&a_vals, n);
        let b = matrix_from(&b_vals, n);
        let pa = pad(a.view(), n + extra).unwrap();
        let pb = pad(b.view(), n + extra).unwrap();
        let padded = direct_multiply(pa.view(), pb.view());
        let corner = top_left(padded.view(), n).unwrap().to_owned();
        assert_close(&corner, &direct_multiply(a.view(), b.view()));
    }

    /// The derived embedding is always a valid cover of n.
    #[test]
    fn embedding_is_valid(n in 1usize..100_000) {
        let e = derive_embedding(n).unwrap();
        prop_assert!(e.base_size >= 1);
        prop_assert!(e.depth >= 1);
        prop_assert_eq!(e.size, e.base_size << e.depth);
        prop_assert!(e.size >= n);
    }

    /// Strassen through a padded embedding still yields the true product.
    #[test]
    fn embedded_strassen_matches_direct(
        n in 1usize..40,
        a_vals in prop::collection::vec(-2.0f64..2.0, 1..32),
        b_vals in prop::collection::vec(-2.0f64..2.0, 1..32),
    ) {
        let e = derive_embedding(n).unwrap();
        let a = matrix_from(&a_vals, n);
        let b = matrix_from(&b_vals, n);
        let pa = pad(a.view(), e.size).unwrap();
        let pb = pad(b.view(), e.size).unwrap();
        let (product, counts) = StrassenMultiplier::new(e.base_size)
            .multiply(pa.view(), pb.view())
            .unwrap();
        let corner = top_left(product.view(), n).unwrap().to_owned();
        assert_close(&corner, &direct_multiply(a.view(), b.view()));
        prop_assert_eq!(counts, predict_counts(e.base_size, e.depth));
    }
}

/// m = 1, k = 0: a single scalar product and no additions.
#[test]
fn one_by_one() {
    let a = Array2::from_elem((1, 1), 2.5);
    let b = Array2::from_elem((1, 1), 4.0);
    let (product, counts) = StrassenMultiplier::new(1).multiply(a.view(), b.view()).unwrap();
    assert_abs_diff_eq!(product[[0, 0]], 10.0);
    assert_eq!(counts.multiplications, 1);
    assert_eq!(counts.additions, 0);
}

/// For m = 1 the multiplication advantage is positive and grows with k.
#[test]
fn multiplication_advantage_grows() {
    let mut previous = 0;
    for k in 1..8u32 {
        let n = 1usize << k;
        let advantage = naive_counts(n).multiplications - predict_counts(1, k).multiplications;
        assert!(advantage > previous, "k = {k}");
        previous = advantage;
    }
}

/// Strassen needs fewer multiplications than naive whenever m < n.
#[test]
fn fewer_multiplications_than_naive() {
    for (base, depth) in [(1, 1), (1, 3), (2, 1), (3, 2), (4, 2)] {
        let n = base << depth;
        let a = Array2::<f64>::ones((n, n));
        let mut counter = OperationCounter::new(base, false);
        strassen_core::strassen_multiply(a.view(), a.view(), &mut counter).unwrap();
        assert!(counter.counts().multiplications < naive_counts(n).multiplications);
    }
}
