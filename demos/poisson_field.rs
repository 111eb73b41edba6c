//! Poisson Solution on the Unit Square
//!
//! -Δu = 2π²·sin(πx)·sin(πy),  u = 0 on the boundary
//!
//! The exact solution u(x, y) = sin(πx)·sin(πy) stands in for a trained
//! approximator; any trained network would plug in the same way through
//! the `TrainedModel` trait. Renders the field in all three modes.

use nalgebra::{DMatrix, DVector};
use pdeplot::model::{ModelError, TrainedModel};
use pdeplot::plot::{plot_field_2d, ColorMap, FieldPlotConfig};
use std::error::Error;

/// Closed-form Poisson solution acting as a trained model.
struct PoissonSolution;

impl TrainedModel for PoissonSolution {
    fn solve(
        &self,
        points: &DMatrix<f64>,
        _fetches: Option<&str>,
    ) -> Result<DVector<f64>, ModelError> {
        use std::f64::consts::PI;
        Ok(DVector::from_fn(points.nrows(), |i, _| {
            (PI * points[(i, 0)]).sin() * (PI * points[(i, 1)]).sin()
        }))
    }

    fn name(&self) -> &str {
        "Poisson Solution"
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Poisson Solution: 2D Field Rendering ===\n");

    let model = PoissonSolution;

    // Heatmap with the default viridis ramp and a colorbar
    plot_field_2d(&model, "poisson_heatmap.png", None)?;
    println!("Wrote poisson_heatmap.png");

    // Filled contours, 14 bands, plasma ramp
    let mut contour = FieldPlotConfig::contour();
    contour.levels = 14;
    contour.colormap = ColorMap::Plasma;
    contour.title = "Poisson solution, contours".to_string();
    plot_field_2d(&model, "poisson_contour.png", Some(&contour))?;
    println!("Wrote poisson_contour.png");

    // 3D surface view as a vector file
    let mut surface = FieldPlotConfig::surface();
    surface.title = "Poisson solution, surface".to_string();
    plot_field_2d(&model, "poisson_surface.svg", Some(&surface))?;
    println!("Wrote poisson_surface.svg");

    Ok(())
}
