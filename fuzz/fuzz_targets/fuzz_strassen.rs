#![no_main]

use libfuzzer_sys::fuzz_target;
use ndarray::Array2;

use strassen_core::complexity::predict_counts;
use strassen_core::matrix_ops::{all_close, direct_multiply};
use strassen_core::StrassenMultiplier;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First two bytes pick m in 1..=6 and k in 0..=3; the rest feed the entries
    let base = usize::from(data[0] % 6) + 1;
    let depth = u32::from(data[1] % 4);
    let n = base << depth;
    let values = &data[2..];

    let a = Array2::from_shape_fn((n, n), |(i, j)| {
        f64::from(values[(i * n + j) % values.len()]) / 16.0 - 8.0
    });
    let b = Array2::from_shape_fn((n, n), |(i, j)| {
        f64::from(values[(j * n + i + 1) % values.len()]) / 16.0 - 8.0
    });

    let (product, counts) = StrassenMultiplier::new(base)
        .multiply(a.view(), b.view())
        .expect("valid m * 2^k input must multiply");
    let expected = direct_multiply(a.view(), b.view());
    assert!(all_close(product.view(), expected.view(), 1e-9, 1e-7));
    assert_eq!(counts, predict_counts(base, depth));
});
