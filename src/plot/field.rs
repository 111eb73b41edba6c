//! 2D field rendering
//!
//! Evaluates the model on a rectangular grid and renders the solved
//! field as a heatmap, a filled-contour plot, or a 3D surface.
//!
//! The per-cell renderers are shared with the time-section plots,
//! which draw the same picture once per timestamp.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pdeplot::plot::{plot_field_2d, FieldPlotConfig};
//!
//! // Default: 80x80 heatmap over the unit square with a colorbar
//! plot_field_2d(&model, "approximation.png", None)?;
//!
//! // Filled contours with 14 bands
//! let mut config = FieldPlotConfig::contour();
//! config.levels = 14;
//! plot_field_2d(&model, "contours.png", Some(&config))?;
//! ```

use nalgebra::{DMatrix, DVector};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::ops::Range;

use super::colormap::ColorMap;
use super::config::{FieldMode, FieldPlotConfig};
use super::{check_axis, normalize, padded_range, solve_checked, value_extent, PlotError};
use crate::grid::{cart_prod, linspace};
use crate::model::TrainedModel;

// =================================================================================================
// Public API
// =================================================================================================

/// Render the approximate solution over a 2D rectangle.
///
/// Builds the evaluation grid (cartesian product of per-axis uniform
/// sequences over `xlim`/`ylim`, or the supplied `xs`/`ys` axes),
/// calls `model.solve` exactly once, reshapes the result to the grid
/// shape and renders it in the configured [`FieldMode`].
///
/// Heatmap and contour modes draw a colorbar strip on the right unless
/// `config.show_colorbar` is off.
///
/// # Arguments
///
/// * `model`       — trained approximator
/// * `output_path` — output file path (`.svg` → vector, else bitmap)
/// * `config`      — optional configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` when the model fails or returns a mismatched value
/// count, or when the backend cannot write to `output_path`.
pub fn plot_field_2d<M: TrainedModel>(
    model: &M,
    output_path: &str,
    config: Option<&FieldPlotConfig>,
) -> Result<(), PlotError> {
    let default_config = FieldPlotConfig::default();
    let config = config.unwrap_or(&default_config);

    let n = config.resolution();
    let xs = match &config.xs {
        Some(xs) => xs.clone(),
        None => {
            check_axis(n)?;
            linspace(config.xlim.0, config.xlim.1, n)
        }
    };
    let ys = match &config.ys {
        Some(ys) => ys.clone(),
        None => {
            check_axis(n)?;
            linspace(config.ylim.0, config.ylim.1, n)
        }
    };
    check_axis(xs.len())?;
    check_axis(ys.len())?;

    let grid = cart_prod(&[xs.as_slice(), ys.as_slice()]);
    let values = solve_checked(model, &grid, config.fetches.as_deref())?;

    // Row i of the ij-ordered grid is (x index, y index) with the y
    // index varying fastest.
    let field = DMatrix::from_fn(xs.len(), ys.len(), |ix, iy| values[ix * ys.len() + iy]);
    let extent = value_extent(values.iter());

    let ext = std::path::Path::new(output_path)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("png");

    match ext {
        "svg" => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_field_impl(backend, &xs, &ys, &field, config, extent)
        }
        _ => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_field_impl(backend, &xs, &ys, &field, config, extent)
        }
    }
    .map_err(PlotError::render)
}

/// Render the field with a concrete drawing backend.
fn plot_field_impl<DB: DrawingBackend>(
    backend: DB,
    xs: &DVector<f64>,
    ys: &DVector<f64>,
    field: &DMatrix<f64>,
    config: &FieldPlotConfig,
    extent: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    match config.mode {
        FieldMode::Surface => {
            render_surface_section(
                &root,
                Some(&config.title),
                xs,
                ys,
                field,
                config.colormap,
                padded_range(extent.0, extent.1),
                extent,
            )?;
        }
        FieldMode::Heatmap | FieldMode::Contour => {
            let bands = match config.mode {
                FieldMode::Contour => Some(config.levels.max(2)),
                _ => None,
            };

            if config.show_colorbar && config.width > 220 {
                let (main, bar) = root.split_horizontally(config.width as i32 - 110);
                render_planar_section(
                    &main,
                    Some(&config.title),
                    xs,
                    ys,
                    field,
                    config.colormap,
                    bands,
                    extent,
                )?;
                draw_colorbar(&bar, config.colormap, bands, extent)?;
            } else {
                render_planar_section(
                    &root,
                    Some(&config.title),
                    xs,
                    ys,
                    field,
                    config.colormap,
                    bands,
                    extent,
                )?;
            }
        }
    }

    root.present()?;
    Ok(())
}

// =================================================================================================
// Section renderers (shared with the time-section plots)
// =================================================================================================

/// Draw a heatmap or filled-contour view of `field` into `area`.
///
/// `bands = Some(levels)` quantizes values into that many discrete
/// color bands (filled contours); `None` colors each cell by its raw
/// normalized value (heatmap). `extent` fixes the color normalization,
/// so several sections can share one color scale.
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_planar_section<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: Option<&str>,
    xs: &DVector<f64>,
    ys: &DVector<f64>,
    field: &DMatrix<f64>,
    colormap: ColorMap,
    bands: Option<usize>,
    (vmin, vmax): (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut builder = ChartBuilder::on(area);
    builder.margin(10).x_label_area_size(32).y_label_area_size(42);
    if let Some(caption) = caption {
        builder.caption(caption, ("sans-serif", 22).into_font());
    }

    let mut chart = builder.build_cartesian_2d(
        xs[0]..xs[xs.len() - 1],
        ys[0]..ys[ys.len() - 1],
    )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("x")
        .y_desc("y")
        .x_label_formatter(&|x| format!("{:.2}", x))
        .y_label_formatter(&|y| format!("{:.2}", y))
        .draw()?;

    let x_edges = cell_edges(xs);
    let y_edges = cell_edges(ys);

    let mut cells = Vec::with_capacity(xs.len() * ys.len());
    for ix in 0..xs.len() {
        for iy in 0..ys.len() {
            let t = normalize(field[(ix, iy)], vmin, vmax);
            let color = match bands {
                Some(levels) => colormap.sample(band_midpoint(t, levels)),
                None => colormap.sample(t),
            };
            let (x0, x1) = x_edges[ix];
            let (y0, y1) = y_edges[iy];
            cells.push(Rectangle::new([(x0, y0), (x1, y1)], color.filled()));
        }
    }
    chart.draw_series(cells)?;

    Ok(())
}

/// Draw a 3D surface view of `field` into `area`.
///
/// `value_range` fixes the vertical axis; `extent` fixes the color
/// normalization (they differ when sections share a common z range).
#[allow(clippy::too_many_arguments)]
pub(crate) fn render_surface_section<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    caption: Option<&str>,
    xs: &DVector<f64>,
    ys: &DVector<f64>,
    field: &DMatrix<f64>,
    colormap: ColorMap,
    value_range: Range<f64>,
    (vmin, vmax): (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let mut builder = ChartBuilder::on(area);
    builder.margin(14);
    if let Some(caption) = caption {
        builder.caption(caption, ("sans-serif", 22).into_font());
    }

    let mut chart = builder.build_cartesian_3d(
        xs[0]..xs[xs.len() - 1],
        value_range,
        ys[0]..ys[ys.len() - 1],
    )?;

    chart.with_projection(|mut pb| {
        pb.pitch = 0.3;
        pb.yaw = 0.6;
        pb.scale = 0.85;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    chart.draw_series(
        SurfaceSeries::xoz(xs.iter().copied(), ys.iter().copied(), |x, y| {
            field[(nearest_index(xs, x), nearest_index(ys, y))]
        })
        .style_func(&|&v| colormap.sample(normalize(v, vmin, vmax)).mix(0.85).filled()),
    )?;

    Ok(())
}

/// Draw a vertical colorbar strip annotated with the value range.
pub(crate) fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    colormap: ColorMap,
    bands: Option<usize>,
    (vmin, vmax): (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let (lo, hi) = colorbar_range(vmin, vmax);

    let mut chart = ChartBuilder::on(area)
        .margin(18)
        .y_label_area_size(46)
        .build_cartesian_2d(0.0..1.0, lo..hi)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(0)
        .y_labels(6)
        .y_label_formatter(&|v| format!("{:.2}", v))
        .draw()?;

    let steps = bands.unwrap_or(64);
    let strip: Vec<_> = (0..steps)
        .map(|i| {
            let f0 = i as f64 / steps as f64;
            let f1 = (i + 1) as f64 / steps as f64;
            let v0 = lo + f0 * (hi - lo);
            let v1 = lo + f1 * (hi - lo);
            let t = normalize((v0 + v1) / 2.0, vmin, vmax);
            let color = match bands {
                Some(levels) => colormap.sample(band_midpoint(t, levels)),
                None => colormap.sample(t),
            };
            Rectangle::new([(0.0, v0), (1.0, v1)], color.filled())
        })
        .collect();
    chart.draw_series(strip)?;

    Ok(())
}

// =================================================================================================
// Helpers
// =================================================================================================

/// Colorbar span: exactly the value extent, widened only when the
/// extent is degenerate so the chart range stays valid. Keeping the
/// span equal to the extent keeps the tick labels aligned with the
/// colors the field renderer actually used.
fn colorbar_range(vmin: f64, vmax: f64) -> (f64, f64) {
    let span = vmax - vmin;
    if !span.is_finite() || span < 1e-12 {
        let padded = padded_range(vmin, vmax);
        (padded.start, padded.end)
    } else {
        (vmin, vmax)
    }
}

/// Cell boundaries for a sample axis: each sample owns the interval to
/// the midpoints of its neighbors, clamped at the axis ends. Callers
/// guarantee at least two samples.
fn cell_edges(axis: &DVector<f64>) -> Vec<(f64, f64)> {
    let n = axis.len();
    (0..n)
        .map(|i| {
            let lo = if i == 0 {
                axis[0]
            } else {
                (axis[i - 1] + axis[i]) / 2.0
            };
            let hi = if i == n - 1 {
                axis[n - 1]
            } else {
                (axis[i] + axis[i + 1]) / 2.0
            };
            (lo, hi)
        })
        .collect()
}

/// Snap a normalized value to the midpoint of its contour band.
fn band_midpoint(t: f64, levels: usize) -> f64 {
    let band = ((t * levels as f64).floor() as usize).min(levels - 1);
    (band as f64 + 0.5) / levels as f64
}

/// Index of the axis sample closest to `v`.
fn nearest_index(axis: &DVector<f64>, v: f64) -> usize {
    let mut best = 0;
    let mut best_dist = f64::INFINITY;
    for (i, &a) in axis.iter().enumerate() {
        let dist = (a - v).abs();
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

// =================================================================================================
// Tests
// =================================================================================================
