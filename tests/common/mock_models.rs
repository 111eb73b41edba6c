//! Mock trained models for testing
//!
//! These models evaluate closed-form solutions, making them ideal for
//! exercising the plotting functions without a real training run.

use std::cell::RefCell;
use std::f64::consts::PI;

use nalgebra::{DMatrix, DVector};
use pdeplot::model::{ModelError, TrainedModel};

// =================================================================================================
// Decaying Standing Wave: u(x, t) = exp(-t) sin(pi x)
// =================================================================================================

/// Standing-wave model: u(x, t) = exp(-decay * t) * sin(pi * x)
///
/// The solution of the 1D heat equation with a single sine mode, so it
/// doubles as a ground truth for the pairing plot.
pub struct StandingWave {
    pub decay: f64,
}

impl StandingWave {
    pub fn new(decay: f64) -> Self {
        Self { decay }
    }

    /// Evaluate the closed form at a single point.
    pub fn analytical_solution(&self, x: f64, t: f64) -> f64 {
        (-self.decay * t).exp() * (PI * x).sin()
    }
}

impl TrainedModel for StandingWave {
    fn solve(
        &self,
        points: &DMatrix<f64>,
        _fetches: Option<&str>,
    ) -> Result<DVector<f64>, ModelError> {
        let t = |i: usize| if points.ncols() > 1 { points[(i, 1)] } else { 0.0 };
        Ok(DVector::from_fn(points.nrows(), |i, _| {
            self.analytical_solution(points[(i, 0)], t(i))
        }))
    }

    fn name(&self) -> &str {
        "Standing Wave"
    }
}

// =================================================================================================
// Product Mode: u(x, y[, t]) = exp(-t) sin(pi x) sin(pi y)
// =================================================================================================

/// Separable 2D mode, optionally decaying in a trailing time column.
pub struct ProductMode {
    pub decay: f64,
}

impl ProductMode {
    pub fn new(decay: f64) -> Self {
        Self { decay }
    }
}

impl TrainedModel for ProductMode {
    fn solve(
        &self,
        points: &DMatrix<f64>,
        _fetches: Option<&str>,
    ) -> Result<DVector<f64>, ModelError> {
        let t = |i: usize| if points.ncols() > 2 { points[(i, 2)] } else { 0.0 };
        Ok(DVector::from_fn(points.nrows(), |i, _| {
            (-self.decay * t(i)).exp()
                * (PI * points[(i, 0)]).sin()
                * (PI * points[(i, 1)]).sin()
        }))
    }

    fn name(&self) -> &str {
        "Product Mode"
    }
}

// =================================================================================================
// Failing Model
// =================================================================================================

/// Always fails its solve call, for error-path tests.
pub struct FailingModel;

impl TrainedModel for FailingModel {
    fn solve(
        &self,
        _points: &DMatrix<f64>,
        _fetches: Option<&str>,
    ) -> Result<DVector<f64>, ModelError> {
        Err(ModelError::Solve("session lost".to_string()))
    }

    fn name(&self) -> &str {
        "Failing Model"
    }
}

// =================================================================================================
// Recording Wrapper
// =================================================================================================

/// Records every solve call made to an inner model.
///
/// Lets tests assert how the plotting functions build their grids:
/// call count, grid shapes, and the forwarded fetch selector.
pub struct Recording<M> {
    pub inner: M,
    pub calls: RefCell<Vec<SolveCall>>,
}

/// Shape of one recorded solve call.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveCall {
    pub nrows: usize,
    pub ncols: usize,
    pub fetches: Option<String>,
}

impl<M> Recording<M> {
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl<M: TrainedModel> TrainedModel for Recording<M> {
    fn solve(
        &self,
        points: &DMatrix<f64>,
        fetches: Option<&str>,
    ) -> Result<DVector<f64>, ModelError> {
        self.calls.borrow_mut().push(SolveCall {
            nrows: points.nrows(),
            ncols: points.ncols(),
            fetches: fetches.map(str::to_string),
        });
        self.inner.solve(points, fetches)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

// =================================================================================================
// Tests for Mock Models
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standing_wave_analytical() {
        let model = StandingWave::new(1.0);

        // u(0.5, 0) = sin(pi/2) = 1
        assert!((model.analytical_solution(0.5, 0.0) - 1.0).abs() < 1e-10);

        // u(0.5, 1) = exp(-1) ≈ 0.3679
        let u = model.analytical_solution(0.5, 1.0);
        assert!((u - 0.3678794412).abs() < 1e-6);
    }

    #[test]
    fn test_recording_wrapper_captures_shapes() {
        let model = Recording::new(StandingWave::new(1.0));
        let grid = DMatrix::zeros(7, 2);
        model.solve(&grid, Some("u")).unwrap();

        let calls = model.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].nrows, 7);
        assert_eq!(calls[0].ncols, 2);
        assert_eq!(calls[0].fetches.as_deref(), Some("u"));
    }
}
