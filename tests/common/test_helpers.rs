//! Helper functions for integration tests

use std::path::PathBuf;

use nalgebra::DVector;
use tempfile::TempDir;

/// Assert that two vectors agree element-wise within a tolerance.
pub fn assert_vectors_close(
    actual: &DVector<f64>,
    expected: &DVector<f64>,
    tolerance: f64,
    message: &str,
) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{}: Dimension mismatch",
        message
    );

    for (i, (&a, &e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// A chart output path with the given extension inside a fresh
/// temporary directory. The directory is returned so it outlives the
/// assertion on the written file.
pub fn chart_path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }

    #[test]
    fn test_assert_vectors_close_accepts_equal() {
        let v = DVector::from_vec(vec![1.0, 2.0]);
        assert_vectors_close(&v, &v.clone(), 1e-12, "identity");
    }
}
