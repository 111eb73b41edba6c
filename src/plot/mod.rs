//! Chart rendering for trained-model solutions
//!
//! This module turns a model's approximate solution into saved chart
//! images using the `plotters` library.
//!
//! # Organization
//!
//! - **config**: per-chart configuration structs and the [`FieldMode`]
//!   render-mode enum
//! - **colormap**: color ramps for the field renderers
//! - **pair**: 1D approximation-vs-ground-truth plot
//! - **field**: 2D field rendering (heatmap, filled contour, 3D surface)
//! - **sections**: time-section grids for evolution solutions
//! - **loss**: training-loss curve
//!
//! # Output format
//!
//! Every function takes an output path; a `.svg` extension selects the
//! vector backend, anything else the bitmap backend.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pdeplot::plot::{plot_field_2d, FieldPlotConfig};
//!
//! // Heatmap of the solution over the unit square, default 80x80 grid
//! plot_field_2d(&model, "approximation.png", None)?;
//!
//! // Or a 3D surface view
//! let config = FieldPlotConfig::surface();
//! plot_field_2d(&model, "surface.png", Some(&config))?;
//! ```
//!
//! # When to Use Which Function
//!
//! | Problem | Function |
//! |---------|----------|
//! | 1D solution with known ground truth | [`plot_pair_1d`] |
//! | 2D stationary solution | [`plot_field_2d`] |
//! | 1+1D evolution solution (x, t) | [`plot_sections_1d`] |
//! | 2+1D evolution solution (x, y, t) | [`plot_sections_2d`] |
//! | Training-loss history | [`plot_loss`] |

pub mod colormap;
pub mod config;

mod field;
mod loss;
mod pair;
mod sections;

pub use colormap::ColorMap;
pub use config::{
    FieldMode, FieldPlotConfig, FieldSectionsConfig, LegendPosition, LineSectionsConfig,
    LossPlotConfig, PairPlotConfig,
};
pub use field::plot_field_2d;
pub use loss::plot_loss;
pub use pair::plot_pair_1d;
pub use sections::{plot_sections_1d, plot_sections_2d};

use nalgebra::{DMatrix, DVector};
use std::fmt;
use std::ops::Range;
use thiserror::Error;

use crate::model::{ModelError, TrainedModel};

// =================================================================================================
// Errors
// =================================================================================================

/// Failures surfaced by the plotting functions.
///
/// There is no recovery layer: every error propagates to the caller.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The model's solve capability failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The evaluation grid has no points.
    #[error("empty grid: at least one evaluation point is required")]
    EmptyGrid,

    /// A grid was supplied with the wrong number of coordinate columns.
    #[error("grid has {actual} coordinate column(s), expected at least {expected}")]
    GridArity { expected: usize, actual: usize },

    /// The model returned a value count that disagrees with the grid.
    #[error("solve returned {actual} values for {expected} evaluation points")]
    LengthMismatch { expected: usize, actual: usize },

    /// An axis was resolved with fewer samples than a grid needs.
    #[error("{0} sample(s) per axis cannot form a grid; at least 2 are required")]
    Resolution(usize),

    /// A render-mode string did not name any [`FieldMode`] variant.
    #[error("unknown render mode '{0}' (expected 'heatmap', 'contour' or 'surface')")]
    UnknownMode(String),

    /// More timestamps were requested than the sub-plot grid can hold.
    #[error("{sections} time-sections do not fit a sub-plot grid of capacity {capacity}")]
    SectionLayout { sections: usize, capacity: usize },

    /// The drawing backend failed (bad path, canvas error, ...).
    #[error("rendering failed: {0}")]
    Render(String),
}

impl PlotError {
    /// Wrap a backend error. Plotters errors are generic over the
    /// backend, so they are carried as their display form.
    pub(crate) fn render(err: impl fmt::Display) -> Self {
        PlotError::Render(err.to_string())
    }
}

// =================================================================================================
// Shared helpers
// =================================================================================================

/// Reject axis resolutions no chart axis can be built from.
///
/// Checked at the plotting-function boundary, before any axis is
/// materialized, so a bad `num_points` or a one-sample axis override
/// comes back as an error instead of reaching `linspace`'s panic.
pub(crate) fn check_axis(len: usize) -> Result<(), PlotError> {
    if len < 2 {
        return Err(PlotError::Resolution(len));
    }
    Ok(())
}

/// Evaluate the model on a grid and validate the result.
///
/// Enforces the solve contract (one value per grid row) before any
/// rendering happens, and warns about non-finite output, which usually
/// means the model diverged on part of the domain.
pub(crate) fn solve_checked<M: TrainedModel>(
    model: &M,
    grid: &DMatrix<f64>,
    fetches: Option<&str>,
) -> Result<DVector<f64>, PlotError> {
    if grid.nrows() == 0 {
        return Err(PlotError::EmptyGrid);
    }

    log::debug!(
        "evaluating '{}' on {} points ({} coords)",
        model.name(),
        grid.nrows(),
        grid.ncols()
    );

    let values = model.solve(grid, fetches)?;

    if values.len() != grid.nrows() {
        return Err(PlotError::LengthMismatch {
            expected: grid.nrows(),
            actual: values.len(),
        });
    }

    let bad = values.iter().filter(|v| !v.is_finite()).count();
    if bad > 0 {
        log::warn!(
            "'{}' returned {bad} non-finite values; the chart will have gaps",
            model.name()
        );
    }

    Ok(values)
}

/// Min/max of a value sequence, ignoring non-finite entries.
pub(crate) fn value_extent<'a>(values: impl Iterator<Item = &'a f64>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v.is_finite() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min > max {
        // All values were non-finite; any non-degenerate range will do.
        (0.0, 1.0)
    } else {
        (min, max)
    }
}

/// Turn an extent into a plottable axis range.
///
/// Pads by 5% so curves do not touch the frame, and widens degenerate
/// extents (constant fields) into a visible range.
pub(crate) fn padded_range(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    if !span.is_finite() || span < 1e-12 {
        (min - 0.5)..(max + 0.5)
    } else {
        (min - 0.05 * span)..(max + 0.05 * span)
    }
}

/// Normalize a value into `[0, 1]` against an extent, for colormap lookup.
pub(crate) fn normalize(v: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if !span.is_finite() || span < 1e-12 {
        0.5
    } else {
        ((v - min) / span).clamp(0.0, 1.0)
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelError;

    struct FixedOutput(usize);

    impl TrainedModel for FixedOutput {
        fn solve(
            &self,
            _points: &DMatrix<f64>,
            _fetches: Option<&str>,
        ) -> Result<DVector<f64>, ModelError> {
            Ok(DVector::from_element(self.0, 1.0))
        }
    }

    #[test]
    fn test_solve_checked_rejects_empty_grid() {
        let grid = DMatrix::zeros(0, 2);
        let err = solve_checked(&FixedOutput(0), &grid, None).unwrap_err();
        assert!(matches!(err, PlotError::EmptyGrid));
    }

    #[test]
    fn test_solve_checked_rejects_length_mismatch() {
        let grid = DMatrix::zeros(5, 2);
        let err = solve_checked(&FixedOutput(3), &grid, None).unwrap_err();
        assert!(matches!(
            err,
            PlotError::LengthMismatch { expected: 5, actual: 3 }
        ));
    }

    #[test]
    fn test_solve_checked_passes_matching_output() {
        let grid = DMatrix::zeros(4, 1);
        let values = solve_checked(&FixedOutput(4), &grid, None).unwrap();
        assert_eq!(values.len(), 4);
    }

    #[test]
    fn test_check_axis_needs_two_samples() {
        assert!(matches!(check_axis(0), Err(PlotError::Resolution(0))));
        assert!(matches!(check_axis(1), Err(PlotError::Resolution(1))));
        assert!(check_axis(2).is_ok());
    }

    #[test]
    fn test_value_extent_skips_non_finite() {
        let values = vec![1.0, f64::NAN, 3.0, f64::INFINITY, -2.0];
        let (min, max) = value_extent(values.iter());
        assert_eq!(min, -2.0);
        assert_eq!(max, 3.0);
    }

    #[test]
    fn test_padded_range_widens_constant_extent() {
        let range = padded_range(2.0, 2.0);
        assert!(range.start < 2.0 && range.end > 2.0);
    }

    #[test]
    fn test_normalize_constant_extent_is_midpoint() {
        assert_eq!(normalize(7.0, 7.0, 7.0), 0.5);
    }

    #[test]
    fn test_normalize_clamps() {
        assert_eq!(normalize(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(normalize(2.0, 0.0, 1.0), 1.0);
    }
}
