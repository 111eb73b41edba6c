//! Heat Equation: Time Sections
//!
//! ∂u/∂t = κ·Δu on the unit interval and the unit square, single sine
//! mode, zero boundary values. The closed-form solutions
//!
//!   u(x, t)    = exp(-κπ²t)·sin(πx)
//!   u(x, y, t) = exp(-2κπ²t)·sin(πx)·sin(πy)
//!
//! stand in for trained approximators. Renders the 1+1D evolution as
//! line sections and the 2+1D evolution as surface snapshots, both on
//! a 2x3 sub-plot grid.

use nalgebra::{DMatrix, DVector};
use pdeplot::model::{ModelError, TrainedModel};
use pdeplot::plot::{plot_sections_1d, plot_sections_2d, FieldSectionsConfig, LineSectionsConfig};
use std::error::Error;
use std::f64::consts::PI;

/// 1+1D heat mode over (x, t).
struct HeatMode1d {
    kappa: f64,
}

impl TrainedModel for HeatMode1d {
    fn solve(
        &self,
        points: &DMatrix<f64>,
        _fetches: Option<&str>,
    ) -> Result<DVector<f64>, ModelError> {
        Ok(DVector::from_fn(points.nrows(), |i, _| {
            let (x, t) = (points[(i, 0)], points[(i, 1)]);
            (-self.kappa * PI * PI * t).exp() * (PI * x).sin()
        }))
    }

    fn name(&self) -> &str {
        "Heat Mode 1D"
    }
}

/// 2+1D heat mode over (x, y, t).
struct HeatMode2d {
    kappa: f64,
}

impl TrainedModel for HeatMode2d {
    fn solve(
        &self,
        points: &DMatrix<f64>,
        _fetches: Option<&str>,
    ) -> Result<DVector<f64>, ModelError> {
        Ok(DVector::from_fn(points.nrows(), |i, _| {
            let (x, y, t) = (points[(i, 0)], points[(i, 1)], points[(i, 2)]);
            (-2.0 * self.kappa * PI * PI * t).exp() * (PI * x).sin() * (PI * y).sin()
        }))
    }

    fn name(&self) -> &str {
        "Heat Mode 2D"
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    println!("=== Heat Equation: Time Sections ===\n");

    let kappa = 0.1;
    println!("Diffusivity κ: {}", kappa);
    println!("Timestamps: default [0, 0.2, 0.4, 0.6, 0.7, 0.9]\n");

    // 1+1D: one line plot per timestamp
    let mut line_config = LineSectionsConfig::default();
    line_config.title = "Heat equation, u(x, t)".to_string();
    line_config.value_lim = (-0.1, 1.1);
    plot_sections_1d(&HeatMode1d { kappa }, "heat_sections_1d.png", Some(&line_config))?;
    println!("Wrote heat_sections_1d.png");

    // 2+1D: one surface snapshot per timestamp, shared color scale
    let mut field_config = FieldSectionsConfig::default();
    field_config.title = "Heat equation, u(x, y, t)".to_string();
    field_config.value_lim = (-0.1, 1.1);
    plot_sections_2d(&HeatMode2d { kappa }, "heat_sections_2d.png", Some(&field_config))?;
    println!("Wrote heat_sections_2d.png");

    Ok(())
}
