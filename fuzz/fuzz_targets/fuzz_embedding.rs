#![no_main]

use libfuzzer_sys::fuzz_target;
use ndarray::Array2;

use strassen_core::embedding::{derive_embedding, pad, top_left};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let n = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;
    let n = n % 1_000_000 + 1;

    let embedding = derive_embedding(n).expect("n >= 1 must embed");
    assert!(embedding.depth >= 1);
    assert!(embedding.size >= n);
    assert_eq!(embedding.size, embedding.base_size << embedding.depth);

    // Keep the padding check small
    let small = n % 24 + 1;
    let m = Array2::from_shape_fn((small, small), |(i, j)| (i * small + j) as f64);
    let padded = pad(m.view(), small + n % 5).expect("target is never smaller");
    assert_eq!(top_left(padded.view(), small).unwrap(), m);
});
