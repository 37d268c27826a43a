//! Golden file integration tests.
//!
//! Reads tests/testdata/operation_counts.json and verifies that measured
//! Strassen counts, the closed-form prediction, the naive baselines, and the
//! automatic embedding all agree with the recorded values.

use std::sync::Arc;

use ndarray::Array2;
use serde::Deserialize;

use strassen_core::complexity::{naive_counts, predict_counts, OperationCounts};
use strassen_core::embedding::derive_embedding;
use strassen_core::observers::NoOpObserver;
use strassen_core::options::Options;
use strassen_core::StrassenMultiplier;
use strassen_orchestration::orchestrator::random_run;

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    counts: Vec<CountEntry>,
    embeddings: Vec<EmbeddingEntry>,
}

#[derive(Deserialize)]
struct CountEntry {
    base_size: usize,
    depth: u32,
    n: usize,
    multiplications: u64,
    additions: u64,
    naive_multiplications: u64,
    naive_additions: u64,
}

#[derive(Deserialize)]
struct EmbeddingEntry {
    n: usize,
    base_size: usize,
    depth: u32,
    size: usize,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/operation_counts.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_predicted_counts() {
    for entry in &load_golden_data().counts {
        assert_eq!(
            predict_counts(entry.base_size, entry.depth),
            OperationCounts::new(entry.multiplications, entry.additions),
            "m = {}, k = {}",
            entry.base_size,
            entry.depth
        );
    }
}

#[test]
fn golden_naive_baselines() {
    for entry in &load_golden_data().counts {
        assert_eq!(
            naive_counts(entry.n),
            OperationCounts::new(entry.naive_multiplications, entry.naive_additions),
            "n = {}",
            entry.n
        );
    }
}

#[test]
fn golden_measured_counts() {
    for entry in load_golden_data().counts.iter().filter(|e| e.n <= 64) {
        let a = Array2::from_shape_fn((entry.n, entry.n), |(i, j)| (i + j) as f64);
        let (_, counts) = StrassenMultiplier::new(entry.base_size)
            .multiply(a.view(), a.view())
            .unwrap();
        assert_eq!(
            counts,
            OperationCounts::new(entry.multiplications, entry.additions),
            "m = {}, k = {}",
            entry.base_size,
            entry.depth
        );
    }
}

#[test]
fn golden_random_runs() {
    let opts = Options::default().with_seed(Some(2024));
    for entry in load_golden_data().counts.iter().filter(|e| e.n <= 32) {
        let report = random_run(
            entry.base_size,
            entry.depth,
            &opts,
            Arc::new(NoOpObserver::new()),
        )
        .unwrap();
        assert_eq!(report.counts.multiplications, entry.multiplications);
        assert_eq!(report.baseline.multiplications, entry.naive_multiplications);
    }
}

#[test]
fn golden_embeddings() {
    for entry in &load_golden_data().embeddings {
        let embedding = derive_embedding(entry.n).unwrap();
        assert_eq!(embedding.base_size, entry.base_size, "n = {}", entry.n);
        assert_eq!(embedding.depth, entry.depth, "n = {}", entry.n);
        assert_eq!(embedding.size, entry.size, "n = {}", entry.n);
    }
}
