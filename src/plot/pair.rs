//! 1D approximation-vs-ground-truth plotting
//!
//! Draws the model's approximate solution on a 1D domain next to the
//! exact solution, with an optional confidence band around the truth.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pdeplot::plot::{plot_pair_1d, PairPlotConfig};
//!
//! let truth = |xs: &DVector<f64>| xs.map(f64::exp);
//!
//! plot_pair_1d(&model, &truth, "pair.png", None)?;
//!
//! // With a confidence band
//! let config = PairPlotConfig::with_confidence(0.05);
//! plot_pair_1d(&model, &truth, "pair.png", Some(&config))?;
//! ```

use nalgebra::{DMatrix, DVector};
use plotters::prelude::*;
use std::error::Error;

use super::config::PairPlotConfig;
use super::{padded_range, solve_checked, value_extent, PlotError};
use crate::grid::linspace;
use crate::model::{ReferenceSolution, TrainedModel};

/// Plot the model approximation against the exact solution on a 1D domain.
///
/// Evaluates `model.solve` once on the configured grid (default: 200
/// uniform points on `[0, 1]`) and `solution` on the x coordinates,
/// then overlays both curves. With `config.confidence` set, a
/// translucent band `truth ± confidence` is drawn behind the curves.
///
/// # Arguments
///
/// * `model`       — trained approximator
/// * `solution`    — ground-truth function (any suitable closure works)
/// * `output_path` — output file path (`.svg` → vector, else bitmap)
/// * `config`      — optional configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` when the model fails, returns a mismatched value
/// count, `plot_coord` is out of range, or the backend cannot write to
/// `output_path`.
pub fn plot_pair_1d<M: TrainedModel, S: ReferenceSolution>(
    model: &M,
    solution: &S,
    output_path: &str,
    config: Option<&PairPlotConfig>,
) -> Result<(), PlotError> {
    let default_config = PairPlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let points = match &config.points {
        Some(points) => points.clone(),
        None => {
            let axis = linspace(0.0, 1.0, 200);
            DMatrix::from_column_slice(axis.len(), 1, axis.as_slice())
        }
    };

    let coord = config.plot_coord.unwrap_or(0);
    if coord >= points.ncols() {
        return Err(PlotError::GridArity {
            expected: coord + 1,
            actual: points.ncols(),
        });
    }

    let approx = solve_checked(model, &points, None)?;
    let xs: DVector<f64> = points.column(coord).into_owned();

    let truth = solution.evaluate(&xs);
    if truth.len() != xs.len() {
        return Err(PlotError::LengthMismatch {
            expected: xs.len(),
            actual: truth.len(),
        });
    }

    // Value range must cover both curves and the band, if any.
    let band = config.confidence.unwrap_or(0.0);
    let (x_min, x_max) = value_extent(xs.iter());
    let (t_min, t_max) = value_extent(truth.iter());
    let (a_min, a_max) = value_extent(approx.iter());
    let y_min = (t_min - band).min(a_min);
    let y_max = (t_max + band).max(a_max);

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_pair_impl(backend, &xs, &truth, &approx, config, (x_min, x_max), (y_min, y_max))
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_pair_impl(backend, &xs, &truth, &approx, config, (x_min, x_max), (y_min, y_max))
        }
    }
    .map_err(PlotError::render)
}

/// Render the pairing plot with a concrete drawing backend.
fn plot_pair_impl<DB: DrawingBackend>(
    backend: DB,
    xs: &DVector<f64>,
    truth: &DVector<f64>,
    approx: &DVector<f64>,
    config: &PairPlotConfig,
    (x_min, x_max): (f64, f64),
    (y_min, y_max): (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 34).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(padded_range(x_min, x_max), padded_range(y_min, y_max))?;

    if config.show_grid {
        chart
            .configure_mesh()
            .x_desc(&config.xlabel)
            .y_desc(&config.ylabel)
            .x_label_formatter(&|x| format!("{:.2}", x))
            .y_label_formatter(&|y| format!("{:.2}", y))
            .draw()?;
    }

    // Band first so the curves draw on top of it.
    if let Some(confidence) = config.confidence {
        let mut outline: Vec<(f64, f64)> = xs
            .iter()
            .zip(truth.iter())
            .map(|(&x, &t)| (x, t + confidence))
            .collect();
        outline.extend(
            xs.iter()
                .zip(truth.iter())
                .rev()
                .map(|(&x, &t)| (x, t - confidence)),
        );

        let band_color = config.true_color;
        let band_opacity = config.band_opacity;
        chart
            .draw_series(std::iter::once(Polygon::new(
                outline,
                band_color.mix(band_opacity).filled(),
            )))?
            .label("Confidence")
            .legend(move |(x, y)| {
                Rectangle::new(
                    [(x, y - 5), (x + 16, y + 5)],
                    band_color.mix(band_opacity).filled(),
                )
            });
    }

    let true_color = config.true_color;
    chart
        .draw_series(LineSeries::new(
            xs.iter().zip(truth.iter()).map(|(&x, &t)| (x, t)),
            ShapeStyle::from(&true_color).stroke_width(config.line_width + 1),
        ))?
        .label("True solution")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], true_color.stroke_width(2))
        });

    // DashedLineSeries is not available in all plotters versions; keep
    // only every other point so the approximation reads as dashed while
    // staying portable across plotters releases.
    let approx_color = config.approx_color;
    chart
        .draw_series(LineSeries::new(
            xs.iter()
                .zip(approx.iter())
                .enumerate()
                .filter_map(|(i, (&x, &a))| if i % 2 == 0 { Some((x, a)) } else { None }),
            ShapeStyle::from(&approx_color).stroke_width(config.line_width),
        ))?
        .label("Network approximation")
        .legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + 20, y)], approx_color.stroke_width(2))
        });

    chart
        .configure_series_labels()
        .position(config.legend.to_series_label_position())
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
